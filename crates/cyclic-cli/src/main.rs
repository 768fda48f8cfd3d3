//! cyclicprime binary
//!
//! Explores cyclic numbers for prime sub-numbers.

use std::process::ExitCode;

use cyclic_cli::{execute, parse_args, Command, ExploreConfig, Result, USAGE};
use cyclic_primality::{Classifier, FactorDb};

async fn run(args: Vec<String>) -> Result<()> {
    let command = parse_args(args)?;
    if command == Command::Usage {
        println!("{USAGE}");
        return Ok(());
    }

    let config = ExploreConfig::from_env()?;
    let _guard = cyclic_logging::init(&config.logging)?;
    tracing::info!("Application started");

    let oracle = FactorDb::new(config.oracle.clone())?;
    let classifier = Classifier::with_config(oracle, config.classifier.clone());

    let mut stdout = std::io::stdout();
    execute(command, &classifier, config.numerator, &mut stdout).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_usage() {
                eprintln!();
                eprintln!("{USAGE}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
