use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("build_info.rs");

    // Get git commit hash
    let git_hash = get_git_hash();

    // Get build timestamp
    let build_time = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    // Generate build constants. The build number is maintained by hand in
    // src/registry.rs and is never derived from git here.
    let build_code = format!(
        r#"
/// Git commit hash (short)
pub const GIT_HASH: &str = "{}";

/// Build timestamp (RFC 3339, UTC)
pub const BUILD_TIME: &str = "{}";
"#,
        git_hash, build_time
    );

    fs::write(&dest_path, build_code).unwrap();

    // Tell cargo to rerun if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}

fn get_git_hash() -> String {
    if let Ok(output) = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        if output.status.success() {
            if let Ok(hash) = String::from_utf8(output.stdout) {
                return hash.trim().to_string();
            }
        }
    }

    "unknown".to_string()
}
