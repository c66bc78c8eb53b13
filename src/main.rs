//! CLI entry point for the vibration-sensor configurator.
//!
//! Main components: Cli parser, Commands enum and the dispatch into
//! `vibconf::commands`. Settings are loaded once; every command returns the
//! exit code the process ends with.

use anyhow::Context;
use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;
use vibconf::Settings;
use vibconf::commands;
use vibconf::display::Theme;
use vibconf::io::{ExitCode, OutputFormat, OutputManager};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Create custom help text with consistent styling
fn create_custom_help() -> String {
    use console::style;

    let heading = |title: &str| {
        if Theme::should_disable_colors() {
            format!("{title}\n")
        } else {
            format!("{}\n", style(title).cyan().bold())
        }
    };

    let mut help = String::new();

    help.push_str(&heading("Quick Start:"));
    help.push_str(
        "  $ vibconf options models --area Safe --contact Non-Contact --measurement \"Eddy Current\"\n",
    );
    help.push_str(
        "  $ vibconf code \"FL-202F08 [Linear Range: 2 mm, Tip Dia.: 8mm]\" --attr armor=A\n",
    );
    help.push_str("  $ vibconf summary order.toml --set jbIn=2 --text\n\n");

    help.push_str("Resolve sensor options, generate product codes and compile order summaries.\n\n");

    help.push_str(&heading("Usage:"));
    help.push_str("  vibconf [OPTIONS] <COMMAND>\n\n");

    help.push_str(&heading("Commands:"));
    help.push_str("  init        Set up .vibconf directory\n");
    help.push_str("  config      Display active settings\n");
    help.push_str("  options     List the values offered at a wizard step\n");
    help.push_str("  code        Generate the product code for a model\n");
    help.push_str("  families    List code families and their attributes\n");
    help.push_str("  summary     Compile the summary of a selection file\n");
    help.push_str("  check       Report how far a selection can navigate\n");
    help.push_str("  help        Print this message or the help of the given subcommand(s)\n\n");

    help.push_str("See 'vibconf help <command>' for more information on a specific command.\n\n");

    help.push_str(&heading("Options:"));
    help.push_str("  -c, --config <CONFIG>  Path to custom settings.toml file\n");
    help.push_str("      --json             Output JSON envelopes\n");
    help.push_str("  -v, --verbose          Debug logging on stderr\n");
    help.push_str("  -h, --help             Print help\n");
    help.push_str("  -V, --version          Print version\n");

    help
}

/// Vibration-sensor configurator
#[derive(Parser)]
#[command(
    name = "vibconf",
    version = env!("CARGO_PKG_VERSION"),
    about = "Vibration-sensor configurator",
    long_about = "Resolve sensor options, generate product codes and compile order summaries.",
    next_line_help = true,
    styles = clap_cargo_style(),
    override_help = create_custom_help()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output JSON envelopes
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    #[command(about = "Set up .vibconf directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings from .vibconf/settings.toml")]
    Config,

    /// List the values offered at a wizard step
    #[command(
        about = "List measurement types, sensor models or monitoring models",
        after_help = "Examples:\n  vibconf options measurement --contact Contact\n  vibconf options models --area Hazardous --contact Contact --measurement Velocity\n  vibconf options monitoring --type API --make Shinkawa\n\nLabels are matched exactly and are case-sensitive."
    )]
    Options {
        #[command(subcommand)]
        query: OptionsQuery,
    },

    /// Generate a product code
    #[command(
        about = "Generate the product code for a model",
        after_help = "Examples:\n  vibconf code \"FL-202F08 [Linear Range: 2 mm, Tip Dia.: 8mm]\"\n  vibconf code \"FL-202F08/E50 [Linear Range: 2 mm, Tip Dia.: 8mm]\" --attr armor=A --attr cableLength=10\n  vibconf code WL-142K05 --attr cableLength=3\n\nUnset attributes take the family default. Values a family does not offer fall back to that default."
    )]
    Code {
        /// Catalog model identifier
        model: String,

        /// Attribute override as name=value (repeatable)
        #[arg(short, long = "attr", value_name = "NAME=VALUE")]
        attrs: Vec<String>,
    },

    /// List code families
    #[command(about = "List code families with their attributes and defaults")]
    Families,

    /// Compile the summary of a selection file
    #[command(
        about = "Compile the live summary or the text report of a selection",
        after_help = "Examples:\n  vibconf summary order.toml\n  vibconf summary order.json --set quantity=5 --set jbMoc=FRP --set jbIn=2\n  vibconf summary order.toml --text\n\nEdits go through the same reset cascade as the wizard. The file is never written."
    )]
    Summary {
        /// Selection file (.toml or .json)
        file: PathBuf,

        /// Field assignment as field=value (repeatable)
        #[arg(short, long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Print the plain-text order report instead of the live summary
        #[arg(long)]
        text: bool,
    },

    /// Check wizard navigation for a selection file
    #[command(about = "Report which wizard step a selection can reach")]
    Check {
        /// Selection file (.toml or .json)
        file: PathBuf,
    },
}

/// Queries for the option resolver.
#[derive(Subcommand)]
enum OptionsQuery {
    /// Measurement types for a contact type
    Measurement {
        /// Area classification (does not narrow the list)
        #[arg(long, default_value = "")]
        area: String,

        /// Contact type label, e.g. Contact or Non-Contact
        #[arg(long)]
        contact: String,
    },

    /// Sensor models for an area, contact type and measurement type
    Models {
        #[arg(long)]
        area: String,

        #[arg(long)]
        contact: String,

        #[arg(long)]
        measurement: String,
    },

    /// Monitoring models for a system type and make
    Monitoring {
        /// System type label, e.g. Standalone or API
        #[arg(long = "type")]
        system_type: String,

        /// Make label, e.g. Shinkawa or FM
        #[arg(long)]
        make: String,
    },
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Configuration error loading from {}", path.display())),
        None => Settings::load().context("Configuration error"),
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // init must work even when the existing settings file is broken
    if let Commands::Init { force } = cli.command {
        vibconf::logging::init("", cli.verbose);
        let mut output = OutputManager::new(OutputFormat::from_json_flag(cli.json));
        return Ok(commands::init(&mut output, force));
    }

    let settings = load_settings(&cli)?;

    vibconf::logging::init(&settings.logging.level, cli.verbose || settings.debug);
    Theme::set_color_enabled(settings.output.color);

    let format = OutputFormat::resolve(cli.json, settings.output.format);
    let mut output = OutputManager::new(format);

    let code = match &cli.command {
        Commands::Init { .. } => ExitCode::Success,
        Commands::Config => commands::config(&mut output, &settings),
        Commands::Options { query } => match query {
            OptionsQuery::Measurement { area, contact } => {
                commands::options_measurement(&mut output, area, contact)
            }
            OptionsQuery::Models {
                area,
                contact,
                measurement,
            } => commands::options_models(&mut output, area, contact, measurement),
            OptionsQuery::Monitoring { system_type, make } => {
                commands::options_monitoring(&mut output, system_type, make)
            }
        },
        Commands::Code { model, attrs } => commands::code(&mut output, model, attrs),
        Commands::Families => commands::families(&mut output),
        Commands::Summary { file, set, text } => commands::summary(&mut output, file, set, *text),
        Commands::Check { file } => {
            commands::check(&mut output, file, &settings.wizard.required_fields)
        }
    };

    Ok(code)
}

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::ConfigError
        }
    };

    std::process::exit(code.into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    /// Verifies CLI structure is valid at compile time.
    ///
    /// Uses clap's debug_assert to catch configuration errors.
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeatable_flags() {
        let cli = Cli::parse_from([
            "vibconf",
            "summary",
            "order.toml",
            "--set",
            "jbIn=2",
            "-s",
            "jbMoc=FRP",
            "--json",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Summary { set, text, .. } => {
                assert_eq!(set, vec!["jbIn=2", "jbMoc=FRP"]);
                assert!(!text);
            }
            _ => panic!("expected summary"),
        }
    }

    #[test]
    fn test_options_monitoring_type_flag() {
        let cli = Cli::parse_from([
            "vibconf",
            "options",
            "monitoring",
            "--type",
            "API",
            "--make",
            "FM",
        ]);
        match cli.command {
            Commands::Options {
                query: OptionsQuery::Monitoring { system_type, make },
            } => {
                assert_eq!(system_type, "API");
                assert_eq!(make, "FM");
            }
            _ => panic!("expected options monitoring"),
        }
    }

    /// Quoted arguments in `text`, e.g. model ids in usage examples.
    fn quoted(text: &str) -> Vec<&str> {
        text.split('"').skip(1).step_by(2).collect()
    }

    #[test]
    fn test_help_examples_use_catalog_labels() {
        let help = create_custom_help();
        let command = Cli::command();
        let code_help = command
            .find_subcommand("code")
            .and_then(|sub| sub.get_after_help())
            .map(|text| text.to_string())
            .unwrap();

        let catalog: Vec<&str> = vibconf::resolver::all_sensor_models().collect();
        for text in [help.as_str(), code_help.as_str()] {
            for model in quoted(text).into_iter().filter(|q| q.contains('[')) {
                assert!(catalog.contains(&model), "'{model}' is not a catalog id");
            }
        }
        assert!(code_help.contains("vibconf code WL-142K05"));

        assert!(help.contains("--measurement \"Eddy Current\""));
        assert!(
            !vibconf::resolver::sensor_models_for("Safe", "Non-Contact", "Eddy Current").is_empty()
        );
    }
}
