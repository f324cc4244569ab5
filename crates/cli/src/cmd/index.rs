//! Index command: build the search index.

use std::path::Path;

use helpsite_core::content::load_all;
use helpsite_core::search::SearchIndex;
use tracing::info;

use super::load_config;

pub fn run(config: Option<&Path>, output: Option<&Path>) {
    let rc = load_config(config);

    let documents = match load_all(&rc.content_dir) {
        Ok(docs) => docs,
        Err(e) => {
            eprintln!("Error loading content: {}", e);
            crate::logging::flush();
            std::process::exit(1);
        }
    };

    let index = SearchIndex::build(&documents, &rc.videos);
    info!(documents = documents.len(), entries = index.len(), "search index built");

    let result = match output {
        Some(path) => index.write_to(path).map(|()| {
            println!("Wrote {} entries to {}", index.len(), path.display());
        }),
        None => index.to_json().map(|json| println!("{json}")),
    };

    if let Err(e) = result {
        eprintln!("Error writing index: {}", e);
        crate::logging::flush();
        std::process::exit(1);
    }
}
