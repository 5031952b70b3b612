use anyhow::Result;
use std::path::{Path, PathBuf};

/// Manifest filename used when neither `--manifest` nor `COMPOSER` is set.
pub const DEFAULT_MANIFEST: &str = "composer.json";

/// Environment variable the package manager itself honours for the manifest name.
pub const MANIFEST_ENV: &str = "COMPOSER";

#[derive(Debug)]
pub struct Config {
    pub working_dir: PathBuf,
    pub manifest: PathBuf,
}

/// Resolve the manifest path for a session.
///
/// Precedence: explicit override, then `COMPOSER`, then `composer.json`.
/// Relative names are taken relative to `working_dir`.
pub fn load_config(working_dir: &Path, manifest_override: Option<&Path>) -> Result<Config> {
    let env_manifest = std::env::var_os(MANIFEST_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    Ok(resolve(working_dir, manifest_override, env_manifest))
}

fn resolve(
    working_dir: &Path,
    manifest_override: Option<&Path>,
    env_manifest: Option<PathBuf>,
) -> Config {
    let name = manifest_override
        .map(Path::to_path_buf)
        .or(env_manifest)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));

    Config {
        working_dir: working_dir.to_path_buf(),
        manifest: working_dir.join(name),
    }
}
