#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp workspace with an isolated HOME so no user config leaks in.
pub struct TestEnv {
    tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("seo-analyzer");
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    pub fn path(&self) -> &Path {
        self.tmp.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }
}

pub fn words(n: usize) -> String {
    vec!["lorem"; n].join(" ")
}

/// Flat input that passes every check at the default thresholds.
pub fn perfect_input_json() -> String {
    let title = format!("pizza {}", "x".repeat(44));
    let description = format!("pizza {}", "y".repeat(134));
    let body: Vec<String> = (0..10).map(|_| format!("pizza {}", words(99))).collect();
    let content = format!(
        "<p>{}</p><p><a href=\"https://rust-lang.org\">ext</a> <a href=\"/menu\">menu</a> <a href=\"/about\">about</a></p>",
        body.join(" ")
    );
    serde_json::json!({
        "title": title,
        "description": description,
        "keyphrase": "pizza",
        "slug": "pizza-guide",
        "content": content,
        "keywords": "a, b, c, d, e, f, g",
    })
    .to_string()
}
