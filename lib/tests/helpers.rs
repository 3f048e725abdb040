use std::str::FromStr;

use log::LevelFilter;
use simplelog::SimpleLogger;

/// Setup test logging, LOG_LEVEL overrides the debug default
pub fn setup() {
    let log_level = match std::env::var("LOG_LEVEL").map(|v| LevelFilter::from_str(&v)) {
        Ok(Ok(l)) => l,
        _ => LevelFilter::Debug,
    };

    let _ = SimpleLogger::init(log_level, simplelog::Config::default());
}
