//! Build script embedding the commit hash and build date for `--version`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn git_commit() -> String {
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn build_date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("build_info.rs");

    let contents = format!(
        "pub const BUILD_COMMIT: &str = \"{}\";\npub const BUILD_DATE: &str = \"{}\";\n",
        git_commit(),
        build_date()
    );
    fs::write(&dest, contents).unwrap();

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
