use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use tgsearch::{Locale, app_dirs};

/// Produce the full version banner including the user configuration file.
fn long_version() -> &'static str {
    let config_file = match app_dirs::config_file() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("tgsearch {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config file: {config_file}");

    Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    let mut matches = CliArgs::command().get_matches();
    CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
    name = "tgsearch",
    version,
    long_version = long_version(),
    about = "Look up where a phone number is mentioned across groups, channels and chats",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `tgsearch` binary.
pub(crate) struct CliArgs {
    #[arg(
        short = 'P',
        long,
        value_name = "PHONE",
        help = "Phone number placed in the search field at start-up (default: empty)"
    )]
    pub(crate) phone: Option<String>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "TGSEARCH_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'd',
        long = "delay-ms",
        value_name = "MS",
        help = "Simulated search delay in milliseconds (default: 1200)"
    )]
    pub(crate) delay_ms: Option<u64>,
    #[arg(
        short = 'L',
        long,
        value_enum,
        help = "Language of the screen (default: ru)"
    )]
    pub(crate) locale: Option<LocaleArg>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "no-seed-history",
        help = "Start with an empty search history (default: disabled)"
    )]
    pub(crate) no_seed_history: bool,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Minimum level shown in the log pane (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the final state")]
    pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Languages accepted via the command line.
pub(crate) enum LocaleArg {
    Ru,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::Ru => Locale::Ru,
            LocaleArg::En => Locale::En,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut matches = CliArgs::command().get_matches_from(args);
        CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
    }

    #[test]
    fn parse_cli_accepts_default_arguments() {
        let parsed = parse(&["tgsearch"]);
        assert_eq!(parsed.output, OutputFormat::Plain);
        assert!(parsed.phone.is_none());
        assert!(!parsed.no_seed_history);
    }

    #[test]
    fn parses_phone_and_overrides() {
        let parsed = parse(&[
            "tgsearch",
            "--phone",
            "+7 (900) 000-00-00",
            "--delay-ms",
            "300",
            "-L",
            "en",
            "--theme",
            "light",
            "-o",
            "json",
        ]);
        assert_eq!(parsed.phone.as_deref(), Some("+7 (900) 000-00-00"));
        assert_eq!(parsed.delay_ms, Some(300));
        assert_eq!(parsed.locale, Some(LocaleArg::En));
        assert_eq!(parsed.theme.as_deref(), Some("light"));
        assert_eq!(parsed.output, OutputFormat::Json);
    }

    #[test]
    fn command_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }
}
