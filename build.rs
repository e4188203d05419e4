use std::{env, process::Command};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let hash = command_stdout("git", &["rev-parse", "--short", "HEAD"]);
    let status = command_stdout("git", &["status", "--porcelain"])
        .map(|changes| if changes.is_empty() { "clean" } else { "dirty" }.to_string());
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    let metadata = [
        ("HASH", hash),
        ("STATUS", status),
        ("TIMESTAMP", Some(timestamp)),
        ("TARGET", env::var("TARGET").ok()),
        ("PROFILE", env::var("PROFILE").ok()),
        ("RUSTC", command_stdout("rustc", &["--version"])),
    ];
    for (key, value) in metadata {
        let value = value.unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env=BUDGET_VIEW_BUILD_{key}={value}");
    }
}

/// Trimmed stdout of a successful command, `None` if it failed or is missing.
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
