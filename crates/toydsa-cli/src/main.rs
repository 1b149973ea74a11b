//! Toy DSA CLI
//!
//! Command-line front end for the toy DSA signature engine:
//! - sign a text file and append the signature line
//! - verify a signed file
//! - check a domain-parameter file
//!
//! Parameters come from a JSON file holding the raw `(p, q, h, x, k)`
//! tuple as decimal strings; `g` and `y` are derived, never supplied.

mod artifact;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use toydsa_core::{generate, verify, DomainParameters};
use tracing::{info, Level};

/// Toy DSA - educational file signer
#[derive(Parser)]
#[command(name = "toydsa")]
#[command(about = "Educational DSA-style file signer; not for real security")]
#[command(version)]
struct Cli {
    /// Path to the JSON domain-parameter file
    #[arg(short, long, env = "TOYDSA_PARAMS")]
    params: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a text file
    Sign {
        /// File to sign
        input: PathBuf,

        /// Where to write the signed artifact (input + signature line)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify a signed text file
    Verify {
        /// Signed file (message followed by the "r s" line)
        input: PathBuf,
    },

    /// Validate parameters and print the derived values
    Check,
}

/// Raw parameter tuple as it sits on disk.
#[derive(Deserialize)]
struct ParameterFile {
    p: String,
    q: String,
    h: String,
    x: String,
    k: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let params = load_parameters(&cli.params)?;

    match cli.command {
        Commands::Sign { ref input, ref output } => run_sign(&params, input, output.as_deref()),
        Commands::Verify { ref input } => run_verify(&params, input),
        Commands::Check => run_check(&params),
    }
}

fn run_sign(params: &DomainParameters, input: &Path, output: Option<&Path>) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("cannot read {}", input.display()))?;

    let sig = generate(params, content.as_bytes())?;

    info!(r = %sig.r, s = %sig.s, "signature generated");

    println!("hash = {}", sig.hash);
    println!("g = {}", sig.g);
    println!("y = {}", sig.y);
    println!("r = {}", sig.r);
    println!("s = {}", sig.s);

    if let Some(output) = output {
        let signed = artifact::append_signature(&content, &sig.r, &sig.s);
        std::fs::write(output, signed)
            .with_context(|| format!("cannot write {}", output.display()))?;
        info!(path = %output.display(), "signed artifact written");
    }

    Ok(())
}

fn run_verify(params: &DomainParameters, input: &Path) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("cannot read {}", input.display()))?;

    let Some((message, r, s)) = artifact::parse_signed(&content) else {
        bail!("{} carries no signature line", input.display());
    };

    let outcome = verify(params, message.as_bytes(), &r, &s);

    if !outcome.in_bounds {
        println!("r and s fall outside (0, q): signature INVALID");
        std::process::exit(1);
    }

    println!("hash = {}", outcome.hash);
    println!("w = {}", outcome.w);
    println!("u1 = {}", outcome.u1);
    println!("u2 = {}", outcome.u2);
    println!("v = {}", outcome.v);
    println!("r = {r}");
    println!("s = {s}");

    if outcome.matched {
        println!("v == r: signature VALID");
        Ok(())
    } else {
        println!("v != r: signature INVALID");
        std::process::exit(1);
    }
}

fn run_check(params: &DomainParameters) -> Result<()> {
    println!("parameters accepted");
    println!("g = {}", params.g);
    println!("y = {}", params.y);
    Ok(())
}

fn load_parameters(path: &Path) -> Result<DomainParameters> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read parameter file {}", path.display()))?;
    let raw: ParameterFile =
        serde_json::from_str(&json).with_context(|| format!("malformed {}", path.display()))?;

    let params = DomainParameters::new(
        parse_decimal(&raw.p, "p")?,
        parse_decimal(&raw.q, "q")?,
        parse_decimal(&raw.h, "h")?,
        parse_decimal(&raw.x, "x")?,
        parse_decimal(&raw.k, "k")?,
    )?;

    Ok(params)
}

fn parse_decimal(value: &str, name: &str) -> Result<BigUint> {
    BigUint::from_str(value.trim())
        .with_context(|| format!("parameter {name} is not a decimal integer: {value:?}"))
}
