// SPDX-License-Identifier: MPL-2.0
//! Path management for the configuration directory.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`]
//!    (the demo's `--config-dir`, tests)
//! 2. **Environment variable** - `STOREFRONT_UI_CONFIG_DIR`
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "StorefrontUI";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "STOREFRONT_UI_CONFIG_DIR";

/// Returns the configuration directory, honoring an explicit override first.
pub fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }

    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
