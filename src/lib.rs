//! talendroutine: generate Talend Open Studio routine manifests during a build.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOptions, GenerateOutcome, ResolvedGeneration, generate, generate_manifest, init_at,
};
pub use app::config::load_config;
pub use domain::{AppError, Dependency, ManifestConfig, XmiId};
