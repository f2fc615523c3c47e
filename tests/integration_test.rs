//! End-to-end integration tests for the feed extraction engine.
//!
//! Exercises the full path from raw XML bytes through dialect detection to
//! feed- and entry-level extraction, plus the CLI binary, using fixture
//! feeds in each supported dialect.

use std::fs;
use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use roxmltree::Document;

use feedparser::{Feed, FeedError};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn atom_feed_end_to_end() {
    // Scenario A: alternate and self links resolve to different targets.
    let xml = load_fixture("atom.xml");
    let doc = Document::parse(&xml).unwrap();
    let feed = Feed::from_document(&doc).unwrap();

    assert_eq!(feed.feed_type(), "Atom 1.0");
    assert_eq!(feed.title(), "Example Weblog");
    assert_eq!(feed.description(), "Notes on systems programming");
    assert_eq!(feed.link(), "http://site/");
    assert_eq!(feed.feed_link(), "http://feed/");
    assert!(feed.diagnostics().is_empty());

    let items = feed.items();
    assert_eq!(items.len(), 2);

    assert_eq!(items[0].title(), "First post");
    assert_eq!(items[0].pub_date(), "2011-04-01T12:00:00Z");
    assert_eq!(items[0].content(), "<p>Hello from Atom</p>");
    assert_eq!(items[0].link(), "http://site/first");

    // Bare link (no rel attribute) implies rel="alternate".
    assert_eq!(items[1].link(), "http://site/second");
    assert_eq!(items[1].content(), "Plain text body");
}

#[test]
fn rss2_feed_end_to_end() {
    let xml = load_fixture("rss2.xml");
    let doc = Document::parse(&xml).unwrap();
    let feed = Feed::from_document(&doc).unwrap();

    assert_eq!(feed.feed_type(), "RSS 2.0");
    assert_eq!(feed.title(), "Example News");
    assert_eq!(feed.link(), "http://site/");
    assert_eq!(feed.feed_link(), "");
    assert!(feed.diagnostics().is_empty());

    let items = feed.items();
    assert_eq!(items.len(), 2);

    // content:encoded beats description when present and non-empty.
    assert_eq!(items[0].content(), "<p>The full story, with markup.</p>");
    // Without content:encoded the description is the body.
    assert_eq!(items[1].content(), "Only a summary today");
}

#[test]
fn rss091_parses_as_rss2_with_one_warning() {
    // Scenario B: legacy version classifies as RSS 2.0 and reports it.
    let xml = load_fixture("rss091.xml");
    let doc = Document::parse(&xml).unwrap();
    let feed = Feed::from_document(&doc).unwrap();

    assert_eq!(feed.feed_type(), "RSS 2.0");
    assert_eq!(feed.title(), "Legacy Channel");

    let warnings = feed.diagnostics();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("RSS 0.91"));
    assert!(warnings[0].message.contains("RSS 2.0"));
}

#[test]
fn rdf10_feed_end_to_end() {
    // Scenario D: the RDF content chain bottoms out at rss:description.
    let xml = load_fixture("rdf10.xml");
    let doc = Document::parse(&xml).unwrap();
    let feed = Feed::from_document(&doc).unwrap();

    assert_eq!(feed.feed_type(), "RSS 1.0");
    assert_eq!(feed.title(), "Example RDF Channel");
    assert_eq!(feed.description(), "An RSS 1.0 feed");
    assert_eq!(feed.link(), "http://site/");
    assert_eq!(feed.feed_link(), "");

    let items = feed.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title(), "Item one");
    assert_eq!(items[0].link(), "http://site/one");
    assert_eq!(items[0].content(), "Body");
}

#[test]
fn malformed_bytes_surface_before_extraction() {
    // Scenario C: the external parse step fails, no feed is constructed.
    let result = Document::parse("this is not xml <rss");
    let err = FeedError::from(result.unwrap_err());
    assert!(err.to_string().contains("malformed XML document"));
}

#[test]
fn items_twice_yields_equal_sequences() {
    let xml = load_fixture("rss2.xml");
    let doc = Document::parse(&xml).unwrap();
    let feed = Feed::from_document(&doc).unwrap();

    let first = feed.items();
    let second = feed.items();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.title(), b.title());
        assert_eq!(a.content(), b.content());
        assert_eq!(a.pub_date(), b.pub_date());
        assert_eq!(a.link(), b.link());
    }
}

#[test]
fn cli_detect_prints_dialect() {
    let mut cmd = Command::cargo_bin("feedparser").unwrap();
    cmd.arg("detect")
        .arg(fixture_path("atom.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Atom 1.0"));
}

#[test]
fn cli_show_prints_feed_and_entries() {
    let mut cmd = Command::cargo_bin("feedparser").unwrap();
    cmd.arg("show")
        .arg(fixture_path("rss2.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("RSS 2.0"))
        .stdout(predicate::str::contains("Example News"))
        .stdout(predicate::str::contains("Breaking story"));
}

#[test]
fn cli_show_json_is_machine_readable() {
    let mut cmd = Command::cargo_bin("feedparser").unwrap();
    let output = cmd
        .arg("show")
        .arg("--json")
        .arg(fixture_path("rss091.xml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let dump: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(dump["feed_type"], "RSS 2.0");
    assert_eq!(dump["title"], "Legacy Channel");
    assert_eq!(dump["entries"].as_array().unwrap().len(), 1);
    assert_eq!(dump["warnings"].as_array().unwrap().len(), 1);
}

#[test]
fn cli_rejects_unknown_feed_type() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"<html><body>not a feed</body></html>").unwrap();

    let mut cmd = Command::cargo_bin("feedparser").unwrap();
    cmd.arg("detect")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown feed type"));
}

#[test]
fn cli_rejects_malformed_xml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"<rss version=\"2.0\"><channel>").unwrap();

    let mut cmd = Command::cargo_bin("feedparser").unwrap();
    cmd.arg("show")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed XML document"));
}
