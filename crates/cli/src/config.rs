//! CLI arguments and the optional JSON configuration file.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use continuum::{
    Blake3Partitioner, Continuum, ContinuumConfig, Md5Partitioner, Partitioner, DEFAULT_CAPACITY,
};
use serde::Deserialize;
use tracing::{debug, Level};

use crate::commands::Command;

/// Hash function used to place dots and keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HashKind {
    Md5,
    Blake3,
}

#[derive(Parser, Debug)]
#[command(name = "continuum")]
#[command(about = "Resolve keys on a weighted consistent-hashing continuum")]
pub struct CliConfig {
    /// JSON file with `total_dots`, `auto_rebuild` and a `servers` list.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Server as `host:port[:capacity]` (IPv6 as `[addr]:port[:capacity]`);
    /// may be repeated.
    #[arg(long = "server", value_name = "HOST:PORT[:CAPACITY]")]
    pub servers: Vec<ServerSpec>,

    /// Target number of dots on the ring (overrides the config file).
    #[arg(long)]
    pub total_dots: Option<usize>,

    #[arg(long, value_enum, default_value_t = HashKind::Md5)]
    pub hash: HashKind,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Contents of the `--config` file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(flatten)]
    pub continuum: ContinuumConfig,
    #[serde(default)]
    pub servers: Vec<ServerSpec>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// A server given on the command line or in the config file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServerSpec {
    pub hostname: String,
    pub port: u16,
    #[serde(default = "default_capacity")]
    pub capacity: i64,
}

fn default_capacity() -> i64 {
    DEFAULT_CAPACITY
}

impl FromStr for ServerSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hostname, rest) = match s.strip_prefix('[') {
            Some(bracketed) => {
                let (host, rest) = bracketed
                    .split_once(']')
                    .ok_or_else(|| format!("unclosed '[' in {s:?}"))?;
                let rest = rest
                    .strip_prefix(':')
                    .ok_or_else(|| format!("missing port in {s:?}"))?;
                (host, rest)
            }
            None => s
                .split_once(':')
                .ok_or_else(|| format!("missing port in {s:?}"))?,
        };
        if hostname.is_empty() {
            return Err(format!("missing hostname in {s:?}"));
        }

        let mut parts = rest.split(':');
        let port = parts
            .next()
            .unwrap_or_default()
            .parse::<u16>()
            .map_err(|e| format!("invalid port in {s:?}: {e}"))?;
        let capacity = match parts.next() {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|e| format!("invalid capacity in {s:?}: {e}"))?,
            None => DEFAULT_CAPACITY,
        };
        if parts.next().is_some() {
            return Err(format!("too many fields in {s:?}"));
        }
        Ok(Self {
            hostname: hostname.to_owned(),
            port,
            capacity,
        })
    }
}

impl CliConfig {
    pub fn run(self) -> anyhow::Result<()> {
        init_tracing(self.verbose);

        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let mut settings = file.continuum;
        if let Some(total_dots) = self.total_dots {
            settings.total_dots = total_dots;
        }
        // Servers are loaded in one batch; the ring is built once below.
        settings.auto_rebuild = false;

        let servers: Vec<ServerSpec> = file.servers.into_iter().chain(self.servers).collect();
        debug!(
            servers = servers.len(),
            total_dots = settings.total_dots,
            hash = ?self.hash,
            "loading continuum"
        );

        match self.hash {
            HashKind::Md5 => execute(&self.command, settings, Md5Partitioner, servers),
            HashKind::Blake3 => execute(&self.command, settings, Blake3Partitioner, servers),
        }
    }
}

fn execute<P: Partitioner>(
    command: &Command,
    settings: ContinuumConfig,
    partitioner: P,
    servers: Vec<ServerSpec>,
) -> anyhow::Result<()> {
    let continuum = Continuum::with_partitioner(settings, partitioner)?;
    continuum
        .add_servers(
            servers
                .into_iter()
                .map(|s| (s.hostname, s.port, s.capacity)),
        )
        .context("registering servers")?;
    continuum.rebuild().context("building continuum")?;

    let result = command.execute(&continuum)?;
    print!("{result}");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
