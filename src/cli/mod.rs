// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the tickerdex command-line interface.
//!
//! Two subcommands over a JSON array of objects: `search` to run a query and
//! `inspect` to look at what the index holds. Fields are given on the command
//! line as `name[:weight][:fuzzy]`, e.g. `--field symbol:2 --field name:1:fuzzy`.

pub mod display;
pub mod load;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Parser)]
#[command(
    name = "tickerdex",
    about = "Typo-tolerant search over JSON item lists",
    version
)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON item list and display ranked results
    Search {
        /// Path to a JSON array of objects
        items: PathBuf,

        /// Search query
        query: String,

        /// Field to search: `name[:weight][:fuzzy]`. Repeat for more fields.
        #[arg(short, long = "field", required = true)]
        fields: Vec<FieldArg>,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// JSON file with search options (match scores, fuzzy limits)
        #[arg(long)]
        options: Option<PathBuf>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show index statistics and verify index invariants
    Inspect {
        /// Path to a JSON array of objects
        items: PathBuf,

        /// Field to index: `name[:weight][:fuzzy]`. Repeat for more fields.
        #[arg(short, long = "field", required = true)]
        fields: Vec<FieldArg>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

/// A `--field` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldArg {
    pub name: String,
    pub weight: Option<f64>,
    pub fuzzy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldArgError {
    #[error("field name is empty")]
    EmptyName,

    #[error("`{0}` is neither a weight nor `fuzzy`")]
    UnknownPart(String),

    #[error("weight given twice in `{0}`")]
    DuplicateWeight(String),
}

impl FromStr for FieldArg {
    type Err = FieldArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(FieldArgError::EmptyName);
        }

        let mut arg = FieldArg {
            name: name.to_string(),
            weight: None,
            fuzzy: false,
        };
        for part in parts.map(str::trim) {
            if part.eq_ignore_ascii_case("fuzzy") {
                arg.fuzzy = true;
            } else if let Ok(weight) = part.parse::<f64>() {
                if arg.weight.replace(weight).is_some() {
                    return Err(FieldArgError::DuplicateWeight(s.to_string()));
                }
            } else {
                return Err(FieldArgError::UnknownPart(part.to_string()));
            }
        }
        Ok(arg)
    }
}
