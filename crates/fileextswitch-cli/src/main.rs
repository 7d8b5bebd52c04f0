//! fileextswitch CLI - jump between companion files from any editor

mod locale;
mod terminal;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use fileextswitch_core::config::discover_config;
use fileextswitch_core::{
    Companions, SwitchConfig, SwitchOutcome, ViewColumn, gather_companions, switch_to_companion,
};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalHost;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV_VAR: &str = "FILEEXTSWITCH_LOG";

#[derive(Parser)]
#[command(name = "fileextswitch")]
#[command(author, version, about = "Jump between companion files that share a base name")]
#[command(
    long_about = "Prints the next companion of FILE (e.g. foo.component.ts -> foo.component.spec.ts) \
for the given ordered extensions. Repeated invocations with the printed path cycle through all companions."
)]
struct Cli {
    /// File currently being edited
    file: Option<PathBuf>,

    /// Extension to switch to, with a leading '.' (repeatable, in priority order)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Named binding from the config file
    #[arg(short, long, value_name = "NAME")]
    binding: Option<String>,

    /// Raw argument payload, e.g. '{"extensions":[".css"],"useOtherColumn":true}'
    #[arg(long, value_name = "JSON")]
    args: Option<String>,

    /// Open in the other editor column
    #[arg(short = 'o', long)]
    other_column: bool,

    /// Column the file is currently shown in
    #[arg(long, value_name = "N")]
    column: Option<u32>,

    /// Print every companion in cycling order instead of the next one
    #[arg(long)]
    all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Config file path (default: .fileextswitch.toml, then the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Locale for messages (en, es)
    #[arg(long, value_name = "LOCALE")]
    locale: Option<String>,

    /// Verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            terminal::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "off" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config_path = cli
        .config
        .clone()
        .or_else(|| discover_config(&cwd, dirs::config_dir().as_deref()));
    let (config, config_warning) = SwitchConfig::load_or_default(config_path.as_ref());

    locale::init(cli.locale.as_deref(), config.locale.as_deref());
    if let Some(warning) = config_warning {
        terminal::print_warning(&warning);
    }
    report_config_warnings(&config);

    let payload = build_payload(cli, &config)?;
    let active = cli.file.as_deref().map(absolute).transpose()?;
    tracing::debug!(?active, %payload, "running switch");

    let host = TerminalHost::new(active, cli.column.and_then(ViewColumn::new));
    if cli.all {
        return Ok(list_candidates(&host, &payload, cli.format));
    }

    let outcome = switch_to_companion(&host, &payload);
    print_outcome(&outcome, cli.format);

    Ok(match outcome {
        SwitchOutcome::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

/// Bindings that would be rejected when used are reported up front.
fn report_config_warnings(config: &SwitchConfig) {
    for warning in config.validate() {
        let message = match &warning.suggestion {
            Some(suggestion) => format!("{} ({suggestion})", warning.message),
            None => warning.message,
        };
        terminal::print_warning(&message);
    }
}

/// Assemble the command payload. `--args` wins over `--ext`, which wins over
/// `--binding`. With none of them the payload has no extensions, which the
/// validator reports like a misconfigured keybinding.
fn build_payload(cli: &Cli, config: &SwitchConfig) -> anyhow::Result<Value> {
    if let Some(raw) = &cli.args {
        return serde_json::from_str(raw).context("--args is not valid JSON");
    }

    if !cli.extensions.is_empty() {
        return Ok(json!({
            "extensions": cli.extensions,
            "useOtherColumn": cli.other_column,
        }));
    }

    match &cli.binding {
        Some(name) => {
            let Some(mut payload) = config.binding(name) else {
                bail!("unknown binding '{name}'");
            };
            if cli.other_column
                && let Some(object) = payload.as_object_mut()
            {
                object.insert("useOtherColumn".to_string(), Value::Bool(true));
            }
            Ok(payload)
        }
        None => Ok(json!({ "useOtherColumn": cli.other_column })),
    }
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("cannot resolve {}", path.display()))
}

fn print_outcome(outcome: &SwitchOutcome, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            if let SwitchOutcome::Opened { path, .. } = outcome {
                println!("{}", path.display());
            }
        }
        OutputFormat::Json => {
            let report = match outcome {
                SwitchOutcome::Opened { path, column } => json!({
                    "status": "opened",
                    "target": path.display().to_string(),
                    "column": column,
                }),
                SwitchOutcome::NoMatch => json!({ "status": "no-match", "target": null }),
                SwitchOutcome::NoActiveFile => json!({ "status": "no-active-file", "target": null }),
                SwitchOutcome::Failed(e) => json!({
                    "status": "error",
                    "target": null,
                    "error": e.detail(),
                }),
            };
            println!("{report}");
        }
    }
}

/// `--all`: print the whole candidate list for the active file.
fn list_candidates(host: &TerminalHost, payload: &Value, format: OutputFormat) -> ExitCode {
    let candidates = match gather_companions(host, payload) {
        Companions::NoActiveFile => return ExitCode::SUCCESS,
        Companions::Failed(_) => return ExitCode::FAILURE,
        Companions::Found { candidates, .. } => candidates,
    };

    match format {
        OutputFormat::Text => {
            if candidates.is_empty() {
                terminal::print_info(&fileextswitch_core::switch::no_match_message());
            }
            for path in candidates.iter() {
                println!("{}", path.display());
            }
        }
        OutputFormat::Json => {
            let paths: Vec<String> = candidates
                .iter()
                .map(|path| path.display().to_string())
                .collect();
            println!("{}", json!({ "candidates": paths }));
        }
    }
    ExitCode::SUCCESS
}
