use std::process::Command;

// Run `git rev-parse` with `args`, or "unknown" outside a checkout.
fn git_rev(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // shown by `wordsieve --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_rev(&["rev-parse", "--short", "HEAD"]));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_rev(&["rev-parse", "HEAD"]));
    println!("cargo:rerun-if-changed=.git/HEAD");
}
