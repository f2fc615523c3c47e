//! Command-line interface for inspecting feeds.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use roxmltree::Document;
use serde::Serialize;

use crate::error::Result;
use crate::feed::Feed;

/// Detect and extract web syndication feeds (Atom, RSS 2.0, RDF).
#[derive(Parser)]
#[command(name = "feedparser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect the syndication dialect of a feed file.
    Detect {
        /// Path to the feed XML file
        file: PathBuf,
    },
    /// Show the normalized feed: metadata and entries.
    Show {
        /// Path to the feed XML file
        file: PathBuf,

        /// Emit the normalized feed as JSON instead of styled text
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { file } => detect_command(&file),
        Commands::Show { file, json } => show_command(&file, json),
    }
}

fn detect_command(file: &Path) -> Result<()> {
    let xml = fs::read_to_string(file)?;
    let doc = Document::parse(&xml)?;
    let feed = Feed::from_document(&doc)?;

    println!("{}", feed.feed_type());
    Ok(())
}

/// JSON shape of a normalized feed.
#[derive(Serialize)]
struct FeedDump {
    feed_type: String,
    title: String,
    description: String,
    link: String,
    feed_link: String,
    entries: Vec<EntryDump>,
    warnings: Vec<String>,
}

#[derive(Serialize)]
struct EntryDump {
    title: String,
    pub_date: String,
    link: String,
    content: String,
}

fn show_command(file: &Path, json: bool) -> Result<()> {
    let xml = fs::read_to_string(file)?;
    let doc = Document::parse(&xml)?;
    let feed = Feed::from_document(&doc)?;

    if json {
        let entries = feed
            .items()
            .iter()
            .map(|entry| EntryDump {
                title: entry.title(),
                pub_date: entry.pub_date(),
                link: entry.link(),
                content: entry.content(),
            })
            .collect();
        let dump = FeedDump {
            feed_type: feed.feed_type().to_string(),
            title: feed.title(),
            description: feed.description(),
            link: feed.link(),
            feed_link: feed.feed_link(),
            entries,
            warnings: feed.diagnostics().into_iter().map(|d| d.message).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    println!("{} {}", style("Type:").bold(), feed.feed_type());
    println!("{} {}", style("Title:").bold(), feed.title());
    println!("{} {}", style("Description:").bold(), feed.description());
    println!("{} {}", style("Feed link:").bold(), feed.feed_link());
    println!("{} {}", style("Link:").bold(), feed.link());

    for (index, entry) in feed.items().iter().enumerate() {
        println!();
        println!(
            "{} {}",
            style(format!("{}.", index + 1)).bold(),
            style(or_placeholder(entry.title(), "No title")).cyan()
        );
        println!(
            "   {}",
            style(or_placeholder(entry.pub_date(), "No date")).green()
        );
        let link = entry.link();
        if !link.is_empty() {
            println!("   {link}");
        }
        println!("   {}", or_placeholder(entry.content(), "No content"));
    }

    let warnings = feed.diagnostics();
    if !warnings.is_empty() {
        println!();
        println!(
            "{} {}",
            style("Warnings:").yellow().bold(),
            warnings.len()
        );
        for warning in warnings {
            println!("  - {}", warning.message);
        }
    }

    Ok(())
}

/// Empty fields render as a placeholder in the styled output.
fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_detect() {
        let cli = Cli::parse_from(["feedparser", "detect", "feed.xml"]);

        match cli.command {
            Commands::Detect { file } => assert_eq!(file, PathBuf::from("feed.xml")),
            Commands::Show { .. } => panic!("expected detect"),
        }
    }

    #[test]
    fn test_cli_parse_show() {
        let cli = Cli::parse_from(["feedparser", "show", "feed.xml"]);

        match cli.command {
            Commands::Show { file, json } => {
                assert_eq!(file, PathBuf::from("feed.xml"));
                assert!(!json);
            }
            Commands::Detect { .. } => panic!("expected show"),
        }
    }

    #[test]
    fn test_cli_parse_show_json() {
        let cli = Cli::parse_from(["feedparser", "show", "--json", "feed.xml"]);

        match cli.command {
            Commands::Show { json, .. } => assert!(json),
            Commands::Detect { .. } => panic!("expected show"),
        }
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(String::new(), "No title"), "No title");
        assert_eq!(or_placeholder("kept".to_string(), "No title"), "kept");
    }
}
