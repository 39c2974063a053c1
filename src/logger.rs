use std::fmt::Display;
use std::io::Write;

use chrono::{DateTime, Local};
use env_logger::Builder;
use log::{Level, LevelFilter};

fn render_line(now: DateTime<Local>, level: Level, message: impl Display) -> String {
    format!("{} [{}] - {}", now.format("%Y-%m-%d %H:%M:%S"), level, message)
}

/// Timestamped `env_logger` output at `Info`; `RUST_LOG` may override per module.
pub fn init() {
    Builder::new()
        .format(|buf, record| {
            writeln!(buf, "{}", render_line(Local::now(), record.level(), record.args()))
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Logger initialized.");
}
