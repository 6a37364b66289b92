//! Build identification for `/api/buildinfo` and the startup log
//!
//! Exposes GIT_HASH, BUILD_TIMESTAMP and BUILD_PROFILE as compile-time env vars.

use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", git_hash().unwrap_or_else(|| "unknown".to_string()));
    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP={}",
        chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false)
    );
    println!(
        "cargo:rustc-env=BUILD_PROFILE={}",
        std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string())
    );

    // Re-run when the checked-out commit moves; the repository root is the workspace root
    let git_dir = Path::new("../.git");
    if git_dir.is_dir() {
        println!("cargo:rerun-if-changed=../.git/HEAD");
        println!("cargo:rerun-if-changed=../.git/refs/heads");
    }
    println!("cargo:rerun-if-changed=build.rs");
}

/// Short commit hash of the workspace checkout
fn git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_string()).filter(|h| !h.is_empty())
}
