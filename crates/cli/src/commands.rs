//! CLI subcommands and their printable results.

use std::fmt;

use clap::Subcommand;
use continuum::{Continuum, Partitioner, Position};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the server each key resolves to.
    Resolve {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print capacity, dot count and keyspace share per server.
    Stats,
    /// Print every dot in ring order.
    Dots,
}

/// One row of `stats` output.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsRow {
    pub server: String,
    pub capacity: i64,
    pub dots: usize,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    Resolved(Vec<(String, String)>),
    Stats(Vec<StatsRow>),
    Dots(Vec<(Position, String)>),
}

impl Command {
    pub fn execute<P: Partitioner>(
        &self,
        continuum: &Continuum<P>,
    ) -> continuum::Result<CommandResult> {
        match self {
            Command::Resolve { keys } => {
                let mut resolved = Vec::with_capacity(keys.len());
                for key in keys {
                    let server = continuum.resolve(key)?;
                    resolved.push((key.clone(), server.to_string()));
                }
                Ok(CommandResult::Resolved(resolved))
            }
            Command::Stats => {
                let topology = continuum.topology();
                // Servers without dots still get a row.
                let rows = continuum
                    .servers()
                    .iter()
                    .map(|server| {
                        let owned = topology.get(server.id());
                        StatsRow {
                            server: server.to_string(),
                            capacity: server.capacity(),
                            dots: owned.map_or(0, |o| o.dots),
                            share: owned.map_or(0.0, |o| o.share()),
                        }
                    })
                    .collect();
                Ok(CommandResult::Stats(rows))
            }
            Command::Dots => {
                let ring = continuum.snapshot();
                let dots = ring
                    .dots()
                    .iter()
                    .map(|d| (d.position, d.server.to_string()))
                    .collect();
                Ok(CommandResult::Dots(dots))
            }
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Resolved(rows) => {
                for (key, server) in rows {
                    writeln!(f, "{key} -> {server}")?;
                }
            }
            CommandResult::Stats(rows) => {
                writeln!(
                    f,
                    "{:<24} {:>8} {:>6} {:>8}",
                    "server", "capacity", "dots", "share"
                )?;
                for row in rows {
                    writeln!(
                        f,
                        "{:<24} {:>8} {:>6} {:>7.2}%",
                        row.server,
                        row.capacity,
                        row.dots,
                        row.share * 100.0
                    )?;
                }
            }
            CommandResult::Dots(dots) => {
                for (position, server) in dots {
                    writeln!(f, "{position} {server}")?;
                }
            }
        }
        Ok(())
    }
}
