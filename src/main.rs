// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tickerdex::{build_search_index, search_index, verify_index, SearchIndex, SearchOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::*;
use cli::load::{build_config, load_items, load_options};
use cli::{Cli, Commands, FieldArg};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            items,
            query,
            fields,
            limit,
            options,
            json,
        } => run_search(&items, &query, &fields, limit, options.as_deref(), json),
        Commands::Inspect {
            items,
            fields,
            json,
        } => run_inspect(&items, &fields, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,tickerdex={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn build_index(
    items_path: &Path,
    fields: &[FieldArg],
    options: SearchOptions,
) -> Result<SearchIndex<Value>> {
    let items = load_items(items_path)?;
    let config = build_config(fields, options)?;
    let start = Instant::now();
    let index = build_search_index(items, config);
    info!(
        path = %items_path.display(),
        items = index.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "indexed items"
    );
    Ok(index)
}

fn run_search(
    items_path: &Path,
    query: &str,
    fields: &[FieldArg],
    limit: usize,
    options_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let options = match options_path {
        Some(path) => load_options(path)?,
        None => SearchOptions::default(),
    };
    let index = build_index(items_path, fields, options)?;

    let start = Instant::now();
    let mut results = search_index(&index, query);
    let elapsed_us = start.elapsed().as_secs_f64() * 1_000_000.0;
    let total = results.len();
    results.truncate(limit);

    if json {
        let out = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{out}");
        return Ok(());
    }

    let exact = index.config().options.match_scores.exact;
    let normalized = tickerdex::util::normalize(query);
    let label_field = fields.first().map(|f| f.name.as_str()).unwrap_or_default();

    section(&format!("RESULTS for \"{query}\""), true);
    if results.is_empty() {
        row(" no matches");
    }
    for (rank, result) in results.iter().enumerate() {
        let Some(best) = result.best_match() else {
            continue;
        };
        let label = result
            .item
            .get(label_field)
            .and_then(Value::as_str)
            .unwrap_or(best.value.as_str());
        row(&format!(
            " {:>2}. {} {} {}",
            rank + 1,
            score_value(result.score, exact),
            pad_right(&match_type_label(best.match_type), 11),
            pad_right(label, 24),
        ));
        row(&format!(
            "          {}: {}",
            paint(Color::Gray, &best.field),
            highlight(&best.value, &normalized)
        ));
    }
    section("SUMMARY", false);
    row(&format!(
        " {} of {} matches in {}",
        results.len(),
        total,
        timing_us(elapsed_us)
    ));
    close_box();
    Ok(())
}

fn run_inspect(items_path: &Path, fields: &[FieldArg], json: bool) -> Result<()> {
    let index = build_index(items_path, fields, SearchOptions::default())?;
    let stats = index.stats();
    let verification = verify_index(&index);

    if json {
        let out = serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?;
        println!("{out}");
        verification.context("Index failed verification")?;
        return Ok(());
    }

    section("INDEX", true);
    row(&format!(" items           {}", stats.items));
    row(&format!(" prefix entries  {}", stats.prefix_entries));
    row(&format!(" suffix entries  {}", stats.suffix_entries));
    section("FIELDS", false);
    for field in &stats.fields {
        row(&format!(
            " {} weight {:<5} {} values {:<6} items {:<6} distinct {:<6} longest {}",
            pad_right(&bold(Color::Cyan, &field.name), 14),
            field.weight,
            if field.fuzzy { "fuzzy" } else { "     " },
            field.values,
            field.items_with_values,
            field.distinct_values,
            field.longest_value,
        ));
    }
    section("VERIFICATION", false);
    match &verification {
        Ok(report) => row(&format!(
            " {} {} values, {} table entries checked",
            bold(Color::Green, "ok"),
            report.values,
            report.entries_checked
        )),
        Err(e) => row(&format!(" {} {}", bold(Color::Red, "failed"), e)),
    }
    close_box();

    verification.context("Index failed verification")?;
    Ok(())
}
