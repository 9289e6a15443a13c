//! Configuration module
//!
//! Settings come from two places, in increasing priority:
//! 1. Built-in defaults (`PolicySettings::defaults`)
//! 2. Host transform options (`customTransformOptions[PLUGIN_NAME]`),
//!    or `anisotropic.toml` when running the CLI
//!
//! A fresh `PolicyConfig` is resolved for every transform call; nothing is
//! shared or mutated between calls.

mod loader;
mod merge;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, parse_with_warnings, ConfigWarning, CONFIG_FILE,
};
pub use merge::{merge_settings, resolve_config, settings_from_options};
pub use types::{
    GraphSettings, PolicyConfig, PolicySettings, PrivilegedPackageSettings, ResolveMode,
    PLUGIN_NAME,
};
