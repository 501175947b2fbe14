//! dcrwire - command-line front end for the wire codec
//!
//! Encodes and decodes message payloads and renders the network and service
//! tables, using the protocol version and network from the configuration.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dcrwire::config::{self, Config};
use dcrwire::protocol::{
    decode_payload, encode_payload, CurrencyNet, MsgPong, ServiceFlag, PROTOCOL_VERSION,
};

/// dcrwire - wire message codec tool
#[derive(Parser)]
#[command(name = "dcrwire")]
#[command(author = "dcrwire Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Encode, decode and inspect peer wire messages", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Protocol version to use (defaults to the configured one)
    #[arg(long, global = true)]
    pver: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a pong message and print its payload as hex
    Pong {
        /// Nonce to echo (random if omitted)
        #[arg(short, long)]
        nonce: Option<u64>,
    },

    /// Decode a hex payload for the given command
    Decode {
        /// Command name, e.g. "pong"
        command: String,

        /// Payload bytes as hex
        payload: String,
    },

    /// Render a network magic value (name, decimal or 0x-hex)
    Net {
        value: String,
    },

    /// Render a service flag bitset (decimal or 0x-hex)
    Services {
        value: String,
    },

    /// Show current configuration
    Config {
        /// Generate sample configuration
        #[arg(long)]
        generate: bool,

        /// Output path for generated config
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show protocol information
    Info,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        Config::load(config_path)?
    } else {
        Config::load_default()?
    };

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&config.general.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let requested_pver = cli.pver.unwrap_or(config.wire.protocol_version);
    let output = execute(cli.command, &config, requested_pver)?;
    println!("{}", output);

    Ok(())
}

/// Run one subcommand and return what it prints.
///
/// Only the commands that encode or decode check `requested_pver`.
fn execute(command: Commands, config: &Config, requested_pver: u32) -> anyhow::Result<String> {
    let output = match command {
        Commands::Pong { nonce } => {
            let pver = check_pver(requested_pver)?;
            let msg = MsgPong::new(nonce.unwrap_or_else(rand::random));
            let payload = encode_payload(&msg, pver)?;
            tracing::debug!("Encoded {:?} at pver {}", msg, pver);
            hex::encode(&payload)
        }
        Commands::Decode { command, payload } => {
            let pver = check_pver(requested_pver)?;
            let bytes = hex::decode(payload.trim()).context("payload is not valid hex")?;
            let msg = decode_payload(&command, &bytes, pver)?;
            format!("{:?}", msg)
        }
        Commands::Net { value } => {
            let net: CurrencyNet = value.parse()?;
            net.to_string()
        }
        Commands::Services { value } => {
            let flags: ServiceFlag = value.parse()?;
            flags.to_string()
        }
        Commands::Config { generate, output } => {
            if generate {
                let sample = config::generate_sample_config()?;
                if let Some(path) = output {
                    std::fs::write(&path, &sample)?;
                    format!("Configuration written to: {}", path.display())
                } else {
                    sample
                }
            } else {
                toml::to_string_pretty(config)?
            }
        }
        Commands::Info => info_json(config, check_pver(requested_pver)?)?,
    };

    Ok(output)
}

/// Reject protocol versions this build cannot speak
fn check_pver(pver: u32) -> anyhow::Result<u32> {
    if pver == 0 || pver > PROTOCOL_VERSION {
        anyhow::bail!(
            "Unsupported protocol version {} (supported: 1..={})",
            pver,
            PROTOCOL_VERSION
        );
    }
    Ok(pver)
}

/// Protocol information as pretty JSON
fn info_json(config: &Config, pver: u32) -> anyhow::Result<String> {
    let info = serde_json::json!({
        "latest_protocol_version": PROTOCOL_VERSION,
        "protocol_version": pver,
        "network": config.wire.network.to_string(),
        "magic": format!("{:#010x}", config.wire.network.0),
        "services": config.wire.services.to_string(),
        "pong_max_payload": MsgPong::PAYLOAD_LEN,
    });
    Ok(serde_json::to_string_pretty(&info)?)
}
