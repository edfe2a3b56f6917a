//! Hygiene — enforces coding standards at test time
//!
//! Scans the UI crate's production sources for constructs that crash the
//! WASM module at runtime. Budgets are zero; hydration must degrade, never
//! panic.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Pattern and the number of lines allowed to contain it.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("#[allow(dead_code)]", 0),
];

/// Collect production `.rs` files from `src/`, excluding `*_test.rs` sidecars.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn panic_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, max) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  {pattern} found {count}, max {max}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budget exceeded:\n{}", failures.join("\n"));
}
