use std::path::PathBuf;
use std::process::ExitCode;

use base64::prelude::*;
use clap::Parser;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use hyle_noir_verifier::verifier::BarretenbergCli;
use hyle_noir_verifier::{HyleOutput, ProofData, VerifierError};

/// Verifies a Noir proof and prints the decoded Hyle output as compact JSON.
#[derive(Parser, Debug)]
struct Args {
    /// Path to the base64-encoded verification key
    #[arg(long = "vKeyPath")]
    v_key_path: PathBuf,
    /// Path to the JSON proof artifact (proof bytes + public inputs)
    #[arg(long = "proofPath")]
    proof_path: PathBuf,
    /// Barretenberg binary performing the actual cryptographic check
    #[arg(long, default_value = "bb")]
    bb_path: String,
}

fn run(args: &Args) -> Result<Option<HyleOutput>, VerifierError> {
    let b64_vkey = std::fs::read_to_string(&args.v_key_path)?;
    let vkey = BASE64_STANDARD.decode(b64_vkey.trim())?;

    let proof_json = std::fs::read_to_string(&args.proof_path)?;
    let proof: ProofData = serde_json::from_str(&proof_json)?;

    let backend = BarretenbergCli {
        binary: args.bb_path.clone(),
    };
    hyle_noir_verifier::verify_and_parse(&backend, &proof, &vkey)
}

fn main() -> ExitCode {
    // setup tracing; stdout is reserved for the decoded output
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()
        .unwrap();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(Some(output)) => match serde_json::to_string(&output) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                let e = VerifierError::from(e);
                error!("{}", e);
                ExitCode::from(e.exit_code())
            }
        },
        Ok(None) => {
            error!("❌ Noir proof verification failed.");
            ExitCode::from(1)
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
