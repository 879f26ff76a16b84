use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use toy_rsa::demo::Walkthrough;
use toy_rsa::util::{EngineConfig, Sha256Hasher};
use toy_rsa::{Cryptosystem, KeyMaterial, MessageCodec};

/// Walk through textbook RSA: encrypt, decrypt, sign and verify a message.
#[derive(Parser, Debug)]
#[command(name = "toy-rsa")]
#[command(version)]
struct Cli {
    /// Plain-text message to process
    #[arg(short, long, default_value = "hello")]
    message: String,

    /// First prime
    #[arg(short, default_value_t = 53)]
    p: u64,

    /// Second prime
    #[arg(short, default_value_t = 59)]
    q: u64,

    /// Seed for the appended random letter
    #[arg(long)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = EngineConfig::from_env();
    let key = KeyMaterial::with_config(cli.p, cli.q, &config)
        .with_context(|| format!("deriving keys from p={} q={}", cli.p, cli.q))?;
    let codec = MessageCodec::new(Cryptosystem::new(key));

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = Walkthrough::new(&codec)
        .run(&cli.message, &Sha256Hasher, &mut rng)
        .context("running walkthrough")?;

    println!("{}", report);
    Ok(())
}
