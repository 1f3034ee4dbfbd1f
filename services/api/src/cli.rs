use crate::server;
use clap::{Args, Parser, Subcommand};
use epical_engine::config::AppConfig;
use epical_engine::error::AppError;
use epical_engine::scene::{build_handover_log, HandoverForm, SceneEngine, SystemClock};
use epical_engine::telemetry;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "EPICAL Scene Engine",
    about = "Evaluate roleplay police scenes and produce action cards and handover records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a scene and print the case as JSON
    Evaluate(EvaluateArgs),
    /// Evaluate a scene and print the investigations handover record
    Handover(HandoverArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Scene JSON file, or `-` to read from stdin
    #[arg(long, default_value = "-")]
    pub(crate) scene: PathBuf,
    /// Pretty-print the case JSON
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug)]
pub(crate) struct HandoverArgs {
    /// Scene JSON file, or `-` to read from stdin
    #[arg(long)]
    pub(crate) scene: PathBuf,
    /// Handover form JSON; suggested values are used when omitted
    #[arg(long)]
    pub(crate) form: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Handover(args) => run_handover(args),
    }
}

fn engine_from_env() -> Result<SceneEngine, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(SceneEngine::new(config.engine_config()?, Arc::new(SystemClock)))
}

fn read_json(path: &Path) -> Result<Value, AppError> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&raw)?)
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let engine = engine_from_env()?;
    let case = engine.evaluate(&read_json(&args.scene)?);
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&case)?
    } else {
        serde_json::to_string(&case)?
    };
    println!("{rendered}");
    Ok(())
}

fn run_handover(args: HandoverArgs) -> Result<(), AppError> {
    let engine = engine_from_env()?;
    let case = engine.evaluate(&read_json(&args.scene)?);
    let form = match &args.form {
        Some(path) => serde_json::from_value::<HandoverForm>(read_json(path)?)?,
        None => HandoverForm::suggested(&case),
    };
    println!("{}", build_handover_log(&case, &form, engine.clock()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["epical-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn evaluate_reads_stdin_by_default() {
        let cli = Cli::try_parse_from(["epical-api", "evaluate", "--pretty"]).expect("parses");
        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.scene, PathBuf::from("-"));
                assert!(args.pretty);
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }

    #[test]
    fn handover_requires_a_scene() {
        assert!(Cli::try_parse_from(["epical-api", "handover"]).is_err());
    }
}
