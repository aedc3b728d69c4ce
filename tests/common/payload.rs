use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::FirstName;
use rstest::fixture;
use serde_json::{Value, json};
use std::path::PathBuf;

pub const GIT_HASH: &str = "9fceb02d0ae598e95dc970b74767f19372d61af8";

#[fixture]
pub fn payload_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Two CVS rows of one commit followed by a git commit
#[fixture]
pub fn search_result() -> Value {
    json!({
        "config": { "tracker": "https://tracker.example/issue/$1" },
        "repositories": {
            "/srv/cvs/proj": {
                "file_url": "https://cvs.example/[repository]/[file]",
                "commit_url": "https://cvs.example/[repository]/[file]?r1=[old_revision]&r2=[revision]"
            },
            "app": {
                "commit_url": "https://git.example/app/commit/[revision]"
            }
        },
        "data": [
            ["/srv/cvs/proj", "2024-03-01 10:15:00", "alice", "src/a.c", "1.4", "HEAD", "+3/-1", "Fix #12 crash"],
            ["/srv/cvs/proj", "2024-03-01 10:15:07", "alice", "src/b.c", "1.2.2.1", "HEAD", "+1/-0", "Fix #12 crash"],
            ["app", "2024-03-02 08:00:00", "bob", "main.rs", GIT_HASH, "master", "", "Refactor <parser>"]
        ]
    })
}

/// Rows that never merge: every author is distinct
pub fn random_search_result(row_count: usize) -> Value {
    let rows: Vec<Value> = (0..row_count)
        .map(|i| {
            let author = format!("{}{}", FirstName().fake::<String>(), i);
            let description = Words(3..6).fake::<Vec<String>>().join(" ");
            json!(["repo", "2024-03-01 10:00:00", author, format!("f{i}.c"), "1.1", "", "", description])
        })
        .collect();

    json!({ "data": rows })
}

pub fn write_payload(dir: &TempDir, payload: &Value) -> PathBuf {
    let file = dir.child("result.json");
    file.write_str(&payload.to_string())
        .expect("Failed to write payload");
    file.path().to_path_buf()
}
