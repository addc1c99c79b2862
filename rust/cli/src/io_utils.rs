//! Stdin helpers for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trims surrounding whitespace and returns `None` on EOF or read errors.
///
/// # Example
///
/// ```rust,no_run
/// use std::io;
/// # use betcha_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "stdin read failed");
            None
        }
    }
}
