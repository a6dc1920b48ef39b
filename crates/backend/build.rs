use std::env;
use std::fs;
use std::path::Path;

/// Places the workspace `config.toml` next to the built binary, where
/// `load_config` looks for it.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };

    // OUT_DIR is target/<profile>/build/backend-<hash>/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=Target directory not found, config.toml not copied");
        return;
    };

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=No workspace config.toml, the embedded defaults will be used");
        return;
    }

    if let Err(e) = fs::copy(&source, target_dir.join("config.toml")) {
        println!("cargo:warning=Failed to copy config.toml: {}", e);
    }
}
