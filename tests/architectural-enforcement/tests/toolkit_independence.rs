//! Integration Test: Toolkit Independence
//!
//! **Policy**: `folio-core` holds headless state only. It MUST NOT depend on
//! or import the terminal toolkit; the `tui` crate is the only surface.

use std::fs;

use architectural_enforcement::{find_violations, workspace_root};

const TOOLKIT_CRATES: &[&str] = &["ratatui", "crossterm"];

#[test]
fn test_core_sources_do_not_import_toolkit() {
    let needles: Vec<String> = TOOLKIT_CRATES.iter().map(|c| format!("{c}::")).collect();
    let needles: Vec<&str> = needles.iter().map(String::as_str).collect();
    let violations = find_violations("folio/core/src", &needles);

    if !violations.is_empty() {
        eprintln!("\n❌ Terminal toolkit referenced from folio-core:\n");
        for violation in &violations {
            eprintln!("  ❌ {}", violation);
        }
        panic!("\nFound {} toolkit reference(s) in folio-core", violations.len());
    }
}

#[test]
fn test_core_manifest_has_no_toolkit_dependency() {
    let manifest = fs::read_to_string(workspace_root().join("folio/core/Cargo.toml"))
        .expect("folio-core manifest is readable");

    for line in manifest.lines().map(|l| l.split('#').next().unwrap_or(l)) {
        for krate in TOOLKIT_CRATES {
            assert!(
                !line.trim_start().starts_with(krate),
                "folio-core depends on {krate}: {line}"
            );
        }
    }
}
