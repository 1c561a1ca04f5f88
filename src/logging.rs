//! File logging via log4rs.
//!
//! The terminal belongs to the game, so log records can only go to a file.

use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// Route `log` records at `level` and above to `file_path`
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(file_path)?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
