//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version string for `--version`.
pub fn version_line() -> String {
    if BUILD_PROFILE == "release" {
        format!("flappy {} ({}, {})", VERSION, BUILD_DATE, BUILD_COMMIT)
    } else {
        format!(
            "flappy {} ({}, {}, {})",
            VERSION, BUILD_DATE, BUILD_COMMIT, BUILD_PROFILE
        )
    }
}
