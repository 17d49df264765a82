//! CLI for treemd - JSON document tree to Markdown converter

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use treemd::JsonToMarkdown;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input JSON file path (reads stdin if not specified)
    input: Option<PathBuf>,

    /// Output Markdown file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let source = match read_input(args.input.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    };

    let document: serde_json::Value = match serde_json::from_str(&source) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error parsing JSON: {}", e);
            std::process::exit(1);
        }
    };

    let engine = JsonToMarkdown::new();

    match engine.convert(&document) {
        Ok(markdown) => {
            if let Some(output) = args.output {
                if let Err(e) = std::fs::write(&output, &markdown) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                println!("Successfully converted to {:?}", output);
            } else {
                println!("{}", markdown);
            }
        }
        Err(e) => {
            eprintln!("Error converting document: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
