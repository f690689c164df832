pub mod config;
pub mod dependency;
pub mod error;
pub mod identifier;
pub mod manifest;
pub mod talend;

pub use config::{CONFIG_FILE_NAME, ManifestConfig, RoutineConfigFile};
pub use dependency::{Dependency, routine_imports};
pub use error::AppError;
pub use identifier::XmiId;
pub use manifest::{ManifestIds, ProjectDocument, PropertiesDocument, format_timestamp};
