use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use folio_content::{ContentError, list_thoughts, load_thought, thought_slugs};

struct TempContentDir {
    path: PathBuf,
}

impl TempContentDir {
    fn new(name: &str) -> Self {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
        let mut path = env::temp_dir();
        path.push(format!(
            "folio_thoughts_{}_{}_{}",
            name,
            now.as_secs(),
            now.subsec_nanos()
        ));
        fs::create_dir_all(&path).expect("create temp content dir");
        Self { path }
    }

    fn write(&self, file_name: &str, contents: &str) {
        fs::write(self.path.join(file_name), contents).expect("write thought file");
    }
}

impl Drop for TempContentDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

const FIRST: &str = "---\n\
title: On keyboards\n\
excerpt: Why I type the way I do.\n\
date: 2025-03-02\n\
---\n\
A short body about keyboards.\n";

const SECOND: &str = "---\n\
title: Shipping small\n\
excerpt: Lessons from a tiny launch.\n\
date: 2025-07-14\n\
---\n\
A short body about shipping.\n\n\
With a link to https://example.com inside.\n";

#[test]
fn lists_thoughts_newest_first() {
    let dir = TempContentDir::new("list");
    dir.write("on-keyboards.md", FIRST);
    dir.write("shipping-small.md", SECOND);

    let thoughts = list_thoughts(&dir.path).expect("list");
    assert_eq!(thoughts.len(), 2);
    assert_eq!(thoughts[0].slug, "shipping-small");
    assert_eq!(thoughts[0].title, "Shipping small");
    assert_eq!(
        thoughts[0].date,
        NaiveDate::from_ymd_opt(2025, 7, 14).expect("date")
    );
    assert_eq!(thoughts[1].slug, "on-keyboards");
}

#[test]
fn read_time_is_computed_from_the_body() {
    let dir = TempContentDir::new("readtime");
    dir.write("on-keyboards.md", FIRST);

    let thoughts = list_thoughts(&dir.path).expect("list");
    assert_eq!(thoughts[0].read_time, "1 min read");
}

#[test]
fn non_markdown_files_are_ignored() {
    let dir = TempContentDir::new("ignore");
    dir.write("on-keyboards.md", FIRST);
    dir.write("notes.txt", "not a thought");
    dir.write(".keep", "");

    let slugs = thought_slugs(&dir.path).expect("slugs");
    assert_eq!(slugs, vec!["on-keyboards".to_string()]);
}

#[test]
fn load_returns_meta_and_body() {
    let dir = TempContentDir::new("load");
    dir.write("shipping-small.md", SECOND);

    let thought = load_thought(&dir.path, "shipping-small")
        .expect("load")
        .expect("present");
    assert_eq!(thought.meta.excerpt, "Lessons from a tiny launch.");
    assert!(thought.body.starts_with("A short body about shipping."));
    assert!(thought.body.contains("https://example.com"));
}

#[test]
fn load_of_missing_slug_is_none() {
    let dir = TempContentDir::new("missing");
    dir.write("on-keyboards.md", FIRST);

    assert!(
        load_thought(&dir.path, "does-not-exist")
            .expect("load")
            .is_none()
    );
}

#[test]
fn missing_front_matter_names_the_file() {
    let dir = TempContentDir::new("nofence");
    dir.write("broken.md", "no fence at all\n");

    let err = list_thoughts(&dir.path).expect_err("must fail");
    match &err {
        ContentError::FrontMatter { path, .. } => {
            assert!(path.ends_with("broken.md"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("broken.md"));
}

#[test]
fn malformed_yaml_names_the_file() {
    let dir = TempContentDir::new("badyaml");
    dir.write("broken.md", "---\ntitle only, no colon structure\n---\nbody\n");

    let err = list_thoughts(&dir.path).expect_err("must fail");
    assert!(matches!(err, ContentError::FrontMatter { .. }));
    assert!(err.to_string().contains("broken.md"));
}

#[test]
fn listing_a_missing_directory_is_an_io_error() {
    let dir = TempContentDir::new("gone");
    let missing = dir.path.join("nope");

    let err = list_thoughts(&missing).expect_err("must fail");
    assert!(matches!(err, ContentError::Io { .. }));
}
