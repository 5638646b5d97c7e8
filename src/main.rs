mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use tgsearch::{SearchUi, logging};

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in tgsearch::ui::style::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    run_screen(cli.output, resolved)
}

/// Run the interactive screen and print its final state in the chosen format.
fn run_screen(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
    logging::initialize(settings.log_level)?;
    log::info!(
        "starting search screen (locale {}, theme {})",
        settings.ui.locale,
        settings.theme_name
    );

    let outcome = SearchUi::from_config(settings.ui).run()?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}
