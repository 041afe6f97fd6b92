//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT block a runtime thread. Timers are
//! `tokio::time` futures; blocking sleeps and blocking HTTP clients are
//! forbidden in both crates.

use architectural_enforcement::find_violations;

const BLOCKING: &[&str] = &["thread::sleep(", "reqwest::blocking"];

#[test]
fn test_no_blocking_sleep_in_production_code() {
    let mut violations = find_violations("folio/core/src", BLOCKING);
    violations.extend(find_violations("tui/src", BLOCKING));

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Blocking calls found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {}", violation);
        }
        eprintln!("\n✅ Use tokio::time::sleep / tokio::time::interval instead");
        panic!(
            "\nFound {} blocking call(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}
