//! Layered configuration: built-in defaults, then a TOML file named by `BETCHA_CONFIG`,
//! then individual `BETCHA_*` environment variables. Command-line flags are applied on
//! top by the command dispatcher.

use betcha_engine::game::{DEFAULT_STARTING_MONEY, SMALL_BET};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "BETCHA_CONFIG";
pub const STARTING_MONEY_ENV: &str = "BETCHA_STARTING_MONEY";
pub const SEED_ENV: &str = "BETCHA_SEED";
pub const UNICODE_ENV: &str = "BETCHA_UNICODE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_money: u32,
    pub seed: Option<u64>,
    /// Render suits as ♠♥♦♣ instead of s/h/d/c
    pub unicode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_money: DEFAULT_STARTING_MONEY,
            seed: None,
            unicode: crate::formatters::supports_unicode(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_money: ValueSource,
    pub seed: ValueSource,
    pub unicode: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_money: ValueSource::Default,
            seed: ValueSource::Default,
            unicode: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        tracing::debug!(%path, "loaded config file");
        if let Some(v) = f.starting_money {
            cfg.starting_money = v;
            sources.starting_money = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.unicode {
            cfg.unicode = v;
            sources.unicode = ValueSource::File;
        }
    }

    if let Ok(money) = std::env::var(STARTING_MONEY_ENV)
        && !money.is_empty()
    {
        cfg.starting_money = money
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting money: {}", money)))?;
        sources.starting_money = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(unicode) = std::env::var(UNICODE_ENV)
        && !unicode.is_empty()
    {
        cfg.unicode = parse_bool(&unicode)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid unicode flag: {}", unicode)))?;
        sources.unicode = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_money: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    unicode: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_money < SMALL_BET {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_money must be >= {}",
            SMALL_BET
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
