//! Embeds the workspace `VERSION` file as `SUPPLIER_ASSESS_VERSION`.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR");
    let version_path = Path::new(&manifest_dir).join("../../VERSION");
    println!("cargo:rerun-if-changed={}", version_path.display());

    // Packaged builds without the workspace file fall back to the crate version.
    let version = match fs::read_to_string(&version_path) {
        Ok(raw) => raw.trim().to_string(),
        Err(_) => env::var("CARGO_PKG_VERSION").expect("cargo sets CARGO_PKG_VERSION"),
    };
    assert!(!version.is_empty(), "VERSION must not be empty");

    println!("cargo:rustc-env=SUPPLIER_ASSESS_VERSION={version}");
}
