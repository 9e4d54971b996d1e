// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`FITFLOW_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "FitFlow";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FITFLOW_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Call once at startup, before any path is resolved. Later calls are
/// ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/FitFlow/`
/// - macOS: `~/Library/Application Support/FitFlow/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\FitFlow\`
///
/// Returns `None` if the config directory cannot be determined.
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(
        override_path,
        get_cli_config_dir(),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

/// Picks the first available candidate; empty env values are skipped and
/// the platform directory gets the application name appended.
fn resolve_dir(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or(cli)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| {
            platform.map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Option<PathBuf> {
        Some(PathBuf::from("/home/user/.config"))
    }

    #[test]
    fn override_path_takes_precedence() {
        let dir = resolve_dir(
            Some(PathBuf::from("/override")),
            Some(PathBuf::from("/cli")),
            Some("/env".into()),
            platform(),
        );
        assert_eq!(dir, Some(PathBuf::from("/override")));
    }

    #[test]
    fn cli_beats_env() {
        let dir = resolve_dir(
            None,
            Some(PathBuf::from("/cli")),
            Some("/env".into()),
            platform(),
        );
        assert_eq!(dir, Some(PathBuf::from("/cli")));
    }

    #[test]
    fn env_beats_platform_default() {
        let dir = resolve_dir(None, None, Some("/env".into()), platform());
        assert_eq!(dir, Some(PathBuf::from("/env")));
    }

    #[test]
    fn empty_env_var_uses_default() {
        let dir = resolve_dir(None, None, Some(String::new()), platform());
        assert_eq!(dir, Some(PathBuf::from("/home/user/.config/FitFlow")));
    }

    #[test]
    fn nothing_available_yields_none() {
        assert_eq!(resolve_dir(None, None, None, None), None);
    }
}
