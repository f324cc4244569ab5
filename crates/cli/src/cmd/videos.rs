//! Videos command: list the tutorial catalog.

use std::path::Path;

use helpsite_core::videos::{VideoCategory, video_url};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use super::load_config;
use super::output::{print_json, resolve_format, truncate};
use crate::{ListArgs, OutputFormat};

#[derive(Tabled)]
struct VideoRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "URL")]
    url: String,
}

#[derive(Debug, Serialize)]
struct VideoOutput<'a> {
    id: &'a str,
    category: &'a str,
    title: &'a str,
    description: &'a str,
    url: String,
}

pub fn run(config: Option<&Path>, args: ListArgs) {
    let rc = load_config(config);
    let base_url = &rc.site.base_url;

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_table(&rc.videos, base_url),
        OutputFormat::Json => {
            let out: Vec<VideoOutput<'_>> = rc
                .videos
                .iter()
                .flat_map(|c| {
                    c.videos.iter().map(move |v| VideoOutput {
                        id: &v.id,
                        category: &c.name,
                        title: &v.title,
                        description: &v.description,
                        url: video_url(base_url, v),
                    })
                })
                .collect();
            print_json(&out);
        }
        OutputFormat::Quiet => {
            for video in rc.videos.iter().flat_map(|c| &c.videos) {
                println!("{}", video_url(base_url, video));
            }
        }
    }
}

fn print_table(categories: &[VideoCategory], base_url: &str) {
    let rows: Vec<VideoRow> = categories
        .iter()
        .flat_map(|c| {
            c.videos.iter().map(move |v| VideoRow {
                id: v.id.clone(),
                category: format!("{} {}", c.icon, c.name),
                title: v.title.clone(),
                description: truncate(&v.description, 40),
                url: video_url(base_url, v),
            })
        })
        .collect();

    if rows.is_empty() {
        println!("(no videos)");
        return;
    }

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!("\nTotal: {} videos in {} categories", rows.len(), categories.len());
}
