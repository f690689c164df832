//! Filesystem-backed configuration loading.
//!
//! Resolves CLI overrides, `talendroutine.toml` and dependency list files into
//! the domain [`ManifestConfig`](crate::domain::ManifestConfig). Pure file
//! format parsing lives in `domain::config`.

mod load_config;

pub use load_config::{GenerateOptions, ResolvedGeneration, load_config};
