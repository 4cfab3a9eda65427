//! Catalog decoding and classification, end to end without the network
//!
//! Run with: cargo test --test list_repos

use std::fs;

use base64::Engine;
use coderelay::{catalog, matcher, Preferences, Verdict};
use colored::Color;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"name":"foo","desc":"d","languages":["python"],"frameworks":[],"git":"https://example.com/foo.git"},
    {"name":"web","desc":"a site","languages":["javascript"],"frameworks":["react"],"git":"https://example.com/web.git"},
    {"name":"api","desc":"an api","languages":["python"],"frameworks":["django","fastapi"],"git":"https://example.com/api.git"},
    {"name":"cli","desc":"a cli","languages":["python"],"frameworks":["click"],"git":"https://example.com/cli.git"}
]"#;

fn contents_response(json: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(json);
    serde_json::json!({ "type": "file", "encoding": "base64", "content": encoded }).to_string()
}

fn preferences(json: &str) -> (TempDir, Preferences) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("coderelay").join("coderelay.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, json).unwrap();
    let prefs = Preferences::load_or_init(&path).unwrap();
    (dir, prefs)
}

#[test]
fn test_listing_for_matching_project() {
    let projects = catalog::parse_contents_response(&contents_response(CATALOG)).unwrap();
    let (_dir, prefs) =
        preferences(r#"{"languages":["python"],"frameworks":[],"excluded_frameworks":[]}"#);

    let foo = catalog::find_project(&projects, "foo").unwrap();
    let verdict = matcher::classify(foo, &prefs);

    assert_eq!(verdict, Verdict::GoodMatch);
    let line = matcher::colored_listing_line(foo, verdict);
    assert_eq!(line.fgcolor(), Some(Color::Green));
    assert_eq!(matcher::listing_line(foo, verdict), "foo, d good match");
}

#[test]
fn test_verdicts_for_whole_catalog() {
    let projects = catalog::parse_contents_response(&contents_response(CATALOG)).unwrap();
    let (_dir, prefs) = preferences(
        r#"{"languages":["python"],"frameworks":["fastapi"],"excluded_frameworks":["django"]}"#,
    );

    let verdicts: Vec<(String, Verdict)> = projects
        .iter()
        .map(|p| (p.name.clone(), matcher::classify(p, &prefs)))
        .collect();

    assert_eq!(
        verdicts,
        vec![
            ("foo".to_string(), Verdict::GoodMatch),
            ("web".to_string(), Verdict::NewLanguage),
            ("api".to_string(), Verdict::ExcludedFramework),
            ("cli".to_string(), Verdict::NewFramework),
        ]
    );
}

#[test]
fn test_default_preferences_mark_everything_new() {
    let projects = catalog::parse_contents_response(&contents_response(CATALOG)).unwrap();
    let dir = TempDir::new().unwrap();
    let prefs = Preferences::load_or_init(&dir.path().join("coderelay.json")).unwrap();

    assert!(projects
        .iter()
        .all(|p| matcher::classify(p, &prefs) == Verdict::NewLanguage));
}
