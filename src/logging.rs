//! Runtime logging routed into the in-UI log pane.
//!
//! Records go through the `log` facade and are captured by `tui-logger`, so
//! nothing is written to the terminal the screen is drawn on.

use std::sync::OnceLock;

use anyhow::{Result, anyhow};
use log::LevelFilter;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Install the logger once. Later calls only adjust the default level.
pub fn initialize(level: LevelFilter) -> Result<()> {
    if INSTALLED.get().is_none() {
        tui_logger::init_logger(LevelFilter::Trace)
            .map_err(|err| anyhow!("failed to install logger: {err}"))?;
        let _ = INSTALLED.set(());
    }
    tui_logger::set_default_level(level);
    Ok(())
}

/// Parse a level name such as `info` or `debug`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" off "), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
