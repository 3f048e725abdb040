// Copyright (c) 2024-2025 The OrbitX Developers

//! Command line utility for working with OrbitX wallet hand-off links

use std::path::Path;

use clap::Parser;
use log::{debug, info, warn, LevelFilter};
use serde::Serialize;

use orbitx_bridge::deeplink::{
    decode::decode_url,
    encode::{self, Representation},
    payload::{HandoffPayload, WalletRef, WalletSet},
    relay::is_relay_url,
};
use orbitx_bridge::relay::{self, Driver, Engine, Error as RelayError, Event, Output, State};

/// Wallet hand-off link utility
#[derive(Clone, PartialEq, Debug, Parser)]
struct Options {
    /// Subcommand to execute
    #[clap(subcommand)]
    cmd: Actions,

    /// Enable verbose logging
    #[clap(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, PartialEq, Debug, Parser)]
#[non_exhaustive]
enum Actions {
    /// Build the redundant wallet hand-off link for a payload
    Encode {
        /// Provider user identifier
        #[clap(long)]
        user_id: String,

        /// EVM wallet address
        #[clap(long, default_value = "")]
        evm_address: String,

        /// EVM wallet id
        #[clap(long, default_value = "")]
        evm_wallet_id: String,

        /// Solana wallet address
        #[clap(long, default_value = "")]
        solana_address: String,

        /// Solana wallet id
        #[clap(long, default_value = "")]
        solana_wallet_id: String,

        /// Tron wallet address
        #[clap(long, default_value = "")]
        tron_address: String,

        /// Tron wallet id
        #[clap(long, default_value = "")]
        tron_wallet_id: String,

        /// Print every delivery representation, not only the link
        #[clap(long)]
        full: bool,
    },

    /// Decode a wallet hand-off link and print the recovered payload
    Decode {
        /// Link to decode, wrapped relay links are unwrapped first
        #[clap(long)]
        url: String,

        /// Write the decoded payload to a file (`.json`)
        #[clap(long)]
        output: Option<String>,
    },

    /// Drive the relay state machine against a wrapped target
    Relay {
        /// Raw `url` parameter value as received by the relay page
        #[clap(long)]
        target: String,

        /// Fire the settle timer immediately instead of waiting
        #[clap(long)]
        no_wait: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Options::parse();

    // Setup logging
    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default()).unwrap();

    // Execute command
    execute(args.cmd).await?;

    Ok(())
}

/// Driver printing navigations instead of performing them
struct PrintDriver;

impl Driver for PrintDriver {
    fn navigate_frame(&mut self, target: &str) -> Result<(), RelayError> {
        info!("frame navigation: {}", target);
        Ok(())
    }

    fn navigate_location(&mut self, target: &str) -> Result<(), RelayError> {
        info!("location navigation: {}", target);
        Ok(())
    }
}

/// Execute a command
async fn execute(cmd: Actions) -> anyhow::Result<()> {
    debug!("Executing command: {:?}", cmd);

    match cmd {
        Actions::Encode {
            user_id,
            evm_address,
            evm_wallet_id,
            solana_address,
            solana_wallet_id,
            tron_address,
            tron_wallet_id,
            full,
        } => {
            let payload = HandoffPayload::new(
                user_id,
                WalletSet {
                    evm: WalletRef::new(evm_wallet_id, evm_address),
                    solana: WalletRef::new(solana_wallet_id, solana_address),
                    tron: WalletRef::new(tron_wallet_id, tron_address),
                },
            );

            if full {
                for r in encode::representations(&payload) {
                    match r {
                        Representation::Message(m) => {
                            info!("message: {}", serde_json::to_string(&m)?)
                        }
                        Representation::Storage { key, value } => {
                            info!("storage: {} = {}", key, value)
                        }
                        Representation::Navigation { url } => info!("navigation: {}", url),
                    }
                }
            } else {
                println!("{}", encode::wallet_url(&payload));
            }
        }
        Actions::Decode { url, output } => {
            if is_relay_url(&url) {
                debug!("unwrapping relay link");
            }

            let decoded = decode_url(&url);
            if decoded.user_id.is_none() {
                warn!("no user identifier recovered");
            }

            match output {
                Some(file) => write_output(&file, &decoded).await?,
                None => println!("{}", serde_json::to_string_pretty(&decoded)?),
            }
        }
        Actions::Relay { target, no_wait } => {
            let engine = if no_wait {
                let mut engine = Engine::new(PrintDriver);

                let out = engine.update(&Event::arrive(target))?;
                if let Output::ScheduleTimer { delay_ms } = out {
                    debug!("skipping {}ms settle delay", delay_ms);
                    engine.update(&Event::TimerElapsed)?;
                }
                engine
            } else {
                relay::run(PrintDriver, &target).await?
            };

            info!("relay finished: {}", engine.state());

            if engine.state() == State::Invalid {
                return Err(anyhow::anyhow!("relay target rejected"));
            }
        }
    }

    Ok(())
}

/// Helper to write output files if `--output` argument is provided
async fn write_output(file_name: &str, value: &impl Serialize) -> anyhow::Result<()> {
    debug!("Writing output to '{}'", file_name);

    // Determine format from file name
    let p = Path::new(file_name);
    match p.extension().and_then(|e| e.to_str()) {
        // Encode to JSON for `.json` files
        Some("json") => {
            let s = serde_json::to_string_pretty(value)?;
            tokio::fs::write(p, s).await?;
        }
        _ => return Err(anyhow::anyhow!("unsupported output file format")),
    }

    Ok(())
}
