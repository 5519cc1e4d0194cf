use std::env;
use std::str::FromStr;

use anyhow::Result;
use fern::colors::{Color, ColoredLevelConfig};

pub const LOG_LEVEL_VAR: &str = "HTTPCLIENT_LOG";
pub const LOG_COLOR_VAR: &str = "HTTPCLIENT_LOG_COLOR";

/// Install the logger described by `HTTPCLIENT_LOG` and `HTTPCLIENT_LOG_COLOR`.
pub fn init_from_env() -> Result<()> {
    let level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "warn".to_string());
    let colored = env::var(LOG_COLOR_VAR).is_ok_and(|v| is_truthy(&v));
    init(&level, colored)
}

/// Logs go to stderr; stdout is reserved for the response.
pub fn init(log_level: &str, colored: bool) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Utc::now().to_rfc3339(),
                if colored {
                    colors.color(record.level()).to_string()
                } else {
                    record.level().to_string()
                },
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::from_str(log_level)?)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
