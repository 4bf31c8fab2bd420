//! Server configuration.
//!
//! Resolved in order: command line flag, environment variable, built-in default.

use anyhow::{Context, anyhow};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_DATA_PATH: &str = "data/titles_sample.csv";

pub const ENV_BIND: &str = "CATALOG_BIND";
pub const ENV_DATA: &str = "CATALOG_DATA";

pub const USAGE: &str = "Usage: title-catalog [--bind <addr:port>] [--data <csv path>] [--verbose]";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    pub verbose: bool,
}

/// Outcome of argument parsing: either a runnable config or a request for usage text.
#[derive(Debug, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

impl Config {
    /// Parses flags (without the program name) and falls back to the process environment.
    pub fn from_args<I>(args: I) -> anyhow::Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        Self::from_args_with_env(args, |key| std::env::var(key).ok())
    }

    pub fn from_args_with_env<I, F>(args: I, env: F) -> anyhow::Result<Command>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        let mut bind: Option<String> = None;
        let mut data: Option<String> = None;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("--bind requires a value"))?;
                    bind = Some(value.clone());
                    i += 2;
                }
                "--data" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("--data requires a value"))?;
                    data = Some(value.clone());
                    i += 2;
                }
                "--verbose" | "-v" => {
                    verbose = true;
                    i += 1;
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ => {
                    i += 1;
                }
            }
        }

        let bind = bind
            .or_else(|| env(ENV_BIND))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address {:?}", bind))?;

        let data_path = data
            .or_else(|| env(ENV_DATA))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Ok(Command::Run(Config {
            bind_addr,
            data_path,
            verbose,
        }))
    }
}
