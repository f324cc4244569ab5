//! Menu command: print the sidebar tree.

use std::path::Path;

use helpsite_core::navigation::{MenuItem, flatten};

use super::load_config;
use super::output::{print_json, resolve_format};
use crate::{ListArgs, OutputFormat};

pub fn run(config: Option<&Path>, args: ListArgs) {
    let rc = load_config(config);

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_tree(&rc.menu),
        OutputFormat::Json => print_json(&rc.menu),
        OutputFormat::Quiet => {
            for item in flatten(&rc.menu) {
                println!("{}", item.path);
            }
        }
    }
}

fn print_tree(items: &[MenuItem]) {
    if items.is_empty() {
        println!("(menu is empty)");
        return;
    }

    for item in flatten(items) {
        println!("{}{}  {}", "  ".repeat(item.depth), item.label, item.path);
    }
}
