//! ENS Command Line Interface
//!
//! Computes namehashes, label hashes and rent prices offline.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ens_crypto::{labelhash, namehash, NameHasher};
use ens_price_oracle::{PriceOracle, PriceOracleConfig, StablePriceOracle};
use ens_types::{Label, Node};
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ens")]
#[command(about = "ENS namehash and rent price tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Node of a dotted name, e.g. `foo.eth`
    Namehash {
        /// Domain name; empty for the root node
        name: String,
    },
    /// Keccak-256 of a single label
    Labelhash {
        /// Label without dots
        label: String,
    },
    /// Node of `label.<parent>` from the parent node
    Subnode {
        /// Parent node (hex)
        parent: String,
        /// Label to append
        label: String,
    },
    /// Rent price in wei
    Price {
        /// Name to price
        name: String,
        /// Rental duration in seconds
        #[arg(allow_negative_numbers = true)]
        duration: i64,
        /// Current expiry of the name (unix seconds)
        #[arg(long, default_value_t = 0)]
        expires: i64,
        /// Oracle configuration file (TOML)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    println!("{}", run(cli, |key| std::env::var(key).ok())?);
    Ok(())
}

/// Execute `cli`, reading configuration overrides through `env`.
fn run<F>(cli: Cli, env: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let json_output = cli.json;

    match cli.command {
        Commands::Namehash { name } => {
            let node = namehash(&name).with_context(|| format!("cannot hash {:?}", name))?;
            Ok(render(json_output, node.to_string(), || {
                json!({ "name": name, "node": node })
            }))
        }
        Commands::Labelhash { label } => {
            let label = Label::new(label).context("invalid label")?;
            let hash = labelhash(label.as_str());
            Ok(render(json_output, hash.to_string(), || {
                json!({ "label": label, "labelhash": hash })
            }))
        }
        Commands::Subnode { parent, label } => {
            let parent_node: Node = parent
                .parse()
                .with_context(|| format!("invalid parent node {:?}", parent))?;
            let label = Label::new(label).context("invalid label")?;
            let node = NameHasher::keccak().child(&parent_node, &label);
            Ok(render(json_output, node.to_string(), || {
                json!({ "parent": parent_node, "label": label, "node": node })
            }))
        }
        Commands::Price {
            name,
            duration,
            expires,
            config,
        } => {
            let oracle = build_oracle(config, env)?;
            let price = oracle
                .price(&name, expires, duration)
                .with_context(|| format!("cannot price {:?}", name))?;
            Ok(render(json_output, price.to_string(), || {
                json!({
                    "name": name,
                    "duration": duration,
                    "expires": expires,
                    "price_wei": price.to_string(),
                })
            }))
        }
    }
}

fn build_oracle<F>(path: Option<PathBuf>, env: F) -> Result<StablePriceOracle>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => PriceOracleConfig::load_from_file(&path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => PriceOracleConfig::default(),
    };
    config.apply_overrides(env);
    debug!(?config, "price oracle configuration");
    Ok(StablePriceOracle::from_config(&config)?)
}

fn render(json_output: bool, plain: String, structured: impl FnOnce() -> serde_json::Value) -> String {
    if json_output {
        structured().to_string()
    } else {
        plain
    }
}
