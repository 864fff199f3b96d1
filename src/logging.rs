//! log4rs setup.
//!
//! Reads the given YAML file when it exists, otherwise logs warnings and
//! errors to stderr.

use crate::error::AppError;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

fn fallback_config() -> Result<Config, AppError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|e| AppError::Logging(e.to_string()))
}

pub fn init_logging(config_file: &str) -> Result<(), AppError> {
    if Path::new(config_file).exists() {
        log4rs::init_file(config_file, Default::default())
            .map_err(|e| AppError::Logging(format!("{config_file}: {e}")))?;
        log::debug!("Logging configured from {config_file}");
    } else {
        log4rs::init_config(fallback_config()?)
            .map_err(|e| AppError::Logging(e.to_string()))?;
        log::debug!("{config_file} not found, logging to stderr");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_config_builds() {
        let config = fallback_config().unwrap();
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert_eq!(config.appenders().len(), 1);
    }
}
