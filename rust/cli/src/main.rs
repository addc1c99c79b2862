use std::io;

fn main() {
    betcha_cli::logging::init_logging();
    let code = betcha_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
