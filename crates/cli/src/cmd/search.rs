//! Search command implementation.

use std::path::Path;

use helpsite_core::content::load_all;
use helpsite_core::search::{SearchEntry, SearchHit, SearchIndex};
use serde::Serialize;
use tracing::warn;

use super::load_config;
use super::output::{print_json, resolve_format, truncate};
use crate::{OutputFormat, SearchArgs};

/// Search result for JSON output.
#[derive(Debug, Serialize)]
struct SearchResultOutput<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    title: &'a str,
    location: String,
    score: u32,
}

impl<'a> From<&SearchHit<'a>> for SearchResultOutput<'a> {
    fn from(hit: &SearchHit<'a>) -> Self {
        Self {
            kind: hit.entry.kind(),
            title: hit.entry.title(),
            location: location(hit.entry),
            score: hit.score,
        }
    }
}

/// Page route for docs, category for videos.
fn location(entry: &SearchEntry) -> String {
    match entry {
        SearchEntry::Doc { path, .. } => path.clone(),
        SearchEntry::Video { category, .. } => format!("video: {category}"),
    }
}

pub fn run(config: Option<&Path>, args: SearchArgs) {
    let rc = load_config(config);

    // Videos stay searchable when the content directory is absent.
    let documents = load_all(&rc.content_dir).unwrap_or_else(|e| {
        warn!("not searching content pages: {}", e);
        Vec::new()
    });

    let index = SearchIndex::build(&documents, &rc.videos);
    let results = index.search(&args.query, args.limit);

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_results_table(&results),
        OutputFormat::Json => {
            let out: Vec<SearchResultOutput<'_>> =
                results.iter().map(SearchResultOutput::from).collect();
            print_json(&out);
        }
        OutputFormat::Quiet => {
            for hit in &results {
                println!("{}", location(hit.entry));
            }
        }
    }
}

fn print_results_table(results: &[SearchHit<'_>]) {
    if results.is_empty() {
        println!("(no results found)");
        return;
    }

    let title_width = 30;
    let location_width = 40;

    println!(
        "{:<5}  {:<title_width$}  SCORE  LOCATION",
        "TYPE",
        "TITLE",
        title_width = title_width,
    );
    println!(
        "{:-<5}  {:-<title_width$}  {:-<5}  {:-<location_width$}",
        "",
        "",
        "",
        "",
        title_width = title_width,
        location_width = location_width,
    );

    for hit in results {
        println!(
            "{:<5}  {:<title_width$}  {:>5}  {}",
            hit.entry.kind(),
            truncate(hit.entry.title(), title_width),
            hit.score,
            truncate(&location(hit.entry), location_width),
            title_width = title_width,
        );
    }

    println!();
    println!("-- {} results --", results.len());
}
