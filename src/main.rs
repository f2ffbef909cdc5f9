use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use linggle::{ClientFactory, Commands, Router};

#[derive(Parser)]
#[command(name = "linggle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let factory = ClientFactory::from_env();
    debug!("Using endpoints {:?}", factory.config());

    let router = Router::new(&factory);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn query_defaults_to_www() {
        let cli = Cli::try_parse_from(["linggle", "query", "discuss ?about the issue"]).unwrap();
        match cli.command {
            Commands::Query { service, zh, .. } => {
                assert_eq!(service, "www");
                assert!(!zh);
            }
            _ => panic!("expected query command"),
        }
    }

    #[test]
    fn edits_rejects_unknown_error_type() {
        let res = Cli::try_parse_from(["linggle", "edits", "in tent", "--error-type", "swap"]);
        assert!(res.is_err());
    }

    #[test]
    fn correct_parses_engine_and_thresholds() {
        let cli = Cli::try_parse_from([
            "linggle",
            "correct",
            "He go home.",
            "--engine",
            "smt",
            "--threshold",
            "0.9",
        ])
        .unwrap();
        match cli.command {
            Commands::Correct {
                engine,
                threshold,
                threshold_insert,
                ..
            } => {
                assert_eq!(engine, linggle::CorrectionEngine::Smt);
                assert_eq!(threshold, 0.9);
                assert_eq!(threshold_insert, 0.96);
            }
            _ => panic!("expected correct command"),
        }
    }
}
