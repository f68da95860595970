use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use lifeorg::cli::{Cli, Commands, SearchCommand, SummaryCommand, TuiCommand};
use lifeorg::{
    Config, Controller, Error, Query, RecordStore, SearchResult, Summary, load_records,
    logging, pinned_first, resolve_records_path, sample_records, search, tui,
};
use log::debug;

fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    let cli = Cli::parse();
    logging::init(cli.command.log_filter(&config.log_filter));

    let result = match &cli.command {
        Commands::Search(cmd) => handle_search(cmd, &config),
        Commands::Summary(cmd) => handle_summary(cmd, &config),
        Commands::Tui(cmd) => handle_tui(cmd, &config),
    };

    if let Err(e) = result {
        // Determine exit code based on error type
        let exit_code = if is_user_error(&e) { 1 } else { 2 };
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code);
    }
}

/// Determines if an error is a user error (vs internal error).
///
/// User errors are record files that are missing, malformed or contain
/// duplicate ids. Everything else, terminal failures included, is internal.
fn is_user_error(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| match cause.downcast_ref::<Error>() {
        Some(Error::Parse { .. } | Error::DuplicateId(_)) => true,
        Some(Error::Io { source, .. }) => source.kind() == std::io::ErrorKind::NotFound,
        _ => false,
    })
}

/// Loads the record file chosen by flag, environment or default location.
///
/// Falls back to the built-in sample records when none is configured.
fn open_store(explicit: Option<&Path>, config: &Config) -> Result<RecordStore> {
    match resolve_records_path(explicit, config) {
        Some(path) => load_records(&path).context("Failed to load records"),
        None => {
            debug!("using built-in sample records");
            RecordStore::from_records(sample_records()).context("Failed to load sample records")
        }
    }
}

fn handle_search(cmd: &SearchCommand, config: &Config) -> Result<()> {
    let store = open_store(cmd.records.as_deref(), config)?;
    let output = execute_search(cmd, &store)?;
    println!("{output}");
    Ok(())
}

/// Runs the search against a provided store and renders the output.
///
/// Separated from `handle_search` to allow testing without record files.
fn execute_search(cmd: &SearchCommand, store: &RecordStore) -> Result<String> {
    let query = Query::from_raw(
        cmd.text.as_deref(),
        cmd.kind.as_deref(),
        cmd.category.as_deref(),
    );

    let mut results = search(store.records(), &query);
    if cmd.pinned_first {
        results = pinned_first(results);
    }

    if cmd.json {
        return serde_json::to_string_pretty(&results).context("Failed to serialize results");
    }

    if results.is_empty() {
        return Ok("No results found".to_string());
    }
    Ok(results
        .iter()
        .map(format_result)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Formats one result as `[kind] title (NN% match)`.
fn format_result(result: &SearchResult) -> String {
    format!(
        "[{}] {} ({}% match)",
        result.record.kind(),
        result.record.title(),
        (result.score * 100.0).round()
    )
}

fn handle_summary(cmd: &SummaryCommand, config: &Config) -> Result<()> {
    let store = open_store(cmd.records.as_deref(), config)?;
    println!("{}", format_summary(&store.summary()));
    Ok(())
}

fn format_summary(summary: &Summary) -> String {
    let mut lines = vec![
        format!(
            "Notes:  {} ({} pinned)",
            summary.notes, summary.pinned_notes
        ),
        format!(
            "Tasks:  {} ({} completed, {}% done)",
            summary.tasks, summary.completed_tasks, summary.completion_rate
        ),
        format!("Events: {}", summary.events),
    ];

    if !summary.upcoming.is_empty() {
        lines.push(String::new());
        lines.push("Upcoming:".to_string());
        for event in &summary.upcoming {
            lines.push(format!(
                "  {} {:02}:{:02}  {}",
                event.date,
                event.time.hour(),
                event.time.minute(),
                event.title
            ));
        }
    }

    lines.join("\n")
}

fn handle_tui(cmd: &TuiCommand, config: &Config) -> Result<()> {
    let store = open_store(cmd.records.as_deref(), config)?;
    tui::run(Controller::new(store, config.debounce))
}
