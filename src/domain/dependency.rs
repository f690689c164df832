use serde::{Deserialize, Serialize};

use super::AppError;

pub const DEFAULT_SCOPE: &str = "compile";
pub const DEFAULT_TYPE: &str = "jar";

/// Scope whose artifacts never ship with a routine.
pub const TEST_SCOPE: &str = "test";

/// A resolved build dependency as supplied by the host build system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    #[serde(alias = "groupId")]
    pub group_id: String,
    #[serde(alias = "artifactId")]
    pub artifact_id: String,
    pub version: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

fn default_type() -> String {
    DEFAULT_TYPE.to_string()
}

impl Dependency {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        scope: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: scope.into(),
            kind: kind.into(),
        }
    }

    /// Parse a Maven coordinate: `groupId:artifactId:type[:classifier]:version[:scope]`.
    ///
    /// Four fields carry no scope (defaults to `compile`), five end with the
    /// scope, six carry a classifier before the version.
    pub fn parse_coordinate(coordinate: &str) -> Result<Self, AppError> {
        let fields: Vec<&str> = coordinate.trim().split(':').map(str::trim).collect();
        if fields.iter().any(|f| f.is_empty()) {
            return Err(AppError::InvalidCoordinate(coordinate.to_string()));
        }

        match fields.as_slice() {
            [group, artifact, kind, version] => {
                Ok(Self::new(*group, *artifact, *version, DEFAULT_SCOPE, *kind))
            }
            [group, artifact, kind, version, scope] => {
                Ok(Self::new(*group, *artifact, *version, *scope, *kind))
            }
            [group, artifact, kind, _classifier, version, scope] => {
                Ok(Self::new(*group, *artifact, *version, *scope, *kind))
            }
            _ => Err(AppError::InvalidCoordinate(coordinate.to_string())),
        }
    }

    /// Whether the dependency is shipped as a routine import: a `jar` outside `test` scope.
    pub fn is_routine_import(&self) -> bool {
        self.scope != TEST_SCOPE && self.kind == DEFAULT_TYPE
    }

    /// File name of the jar module, `{artifactId}-{version}.jar`.
    pub fn module_name(&self) -> String {
        format!("{}-{}.jar", self.artifact_id, self.version)
    }
}

/// Dependencies that become `imports` entries, in source order.
pub fn routine_imports(dependencies: &[Dependency]) -> impl Iterator<Item = &Dependency> {
    dependencies.iter().filter(|d| d.is_routine_import())
}
