use std::process::Command;

fn main() {
    add_build_info();
}

/// Expose the compiler version so the User-Agent can report the runtime it was built with
fn add_build_info() {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|s| s.split_whitespace().nth(1).map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=ROSETTE_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-changed=build.rs");
}
