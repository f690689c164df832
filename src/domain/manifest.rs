//! In-memory model of the two documents written for a routine.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::talend::{
    AUTHOR_HREF_BASE, CONTENT_HREF_SUFFIX, EXPORT_USER_LOGIN, IMPORT_MESSAGE,
    ITEMS_RELATION_VERSION, PRODUCT_VERSION, PROJECT_DESCRIPTION, PROJECT_LABEL, PROJECT_LANGUAGE,
    PROJECT_TECHNICAL_LABEL, PROPERTY_TYPE_ID, STATUS_CODE, TIMESTAMP_FORMAT,
};
use super::{Dependency, ManifestConfig, XmiId, routine_imports};

/// Format a timestamp the way Talend stores `creationDate`/`modificationDate`.
pub fn format_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Identifiers shared between elements of the two documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestIds {
    pub property: XmiId,
    pub routine: XmiId,
    pub state: XmiId,
    /// Anchors the `author` reference and names the project's `User`.
    pub author: XmiId,
}

/// One `imports` entry of a `RoutineItem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineImport {
    pub id: String,
    pub message: String,
    pub module: String,
    pub name: String,
}

/// Template context for `{label}_{version}.properties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertiesDocument {
    pub property_id: String,
    pub property_type_id: String,
    pub label: String,
    pub purpose: String,
    pub description: String,
    pub creation_date: String,
    pub modification_date: String,
    pub version: String,
    pub status_code: String,
    pub routine_id: String,
    pub author_href: String,
    pub state_id: String,
    pub path: String,
    pub content_href: String,
    pub imports: Vec<RoutineImport>,
}

/// Template context for `talend.project`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDocument {
    pub project_id: String,
    pub label: String,
    pub description: String,
    pub language: String,
    pub technical_label: String,
    pub product_version: String,
    pub items_relation_version: String,
    pub user_id: String,
    pub login: String,
}

impl PropertiesDocument {
    /// Build the routine manifest; `next_import_id` is called once per shipped dependency, in order.
    pub fn new(
        config: &ManifestConfig,
        dependencies: &[Dependency],
        ids: &ManifestIds,
        timestamp: &str,
        mut next_import_id: impl FnMut() -> XmiId,
    ) -> Self {
        let imports = routine_imports(dependencies)
            .map(|dep| RoutineImport {
                id: next_import_id().to_string(),
                message: IMPORT_MESSAGE.to_string(),
                module: dep.module_name(),
                name: dep.artifact_id.clone(),
            })
            .collect();

        Self {
            property_id: ids.property.to_string(),
            property_type_id: PROPERTY_TYPE_ID.to_string(),
            label: config.label.clone(),
            purpose: config.purpose.clone(),
            description: config.description.clone(),
            creation_date: timestamp.to_string(),
            modification_date: timestamp.to_string(),
            version: config.version.clone(),
            status_code: STATUS_CODE.to_string(),
            routine_id: ids.routine.to_string(),
            author_href: format!("{}#{}", AUTHOR_HREF_BASE, ids.author),
            state_id: ids.state.to_string(),
            path: config.path.clone(),
            content_href: format!("{}{}", config.item_stem(), CONTENT_HREF_SUFFIX),
            imports,
        }
    }
}

impl ProjectDocument {
    pub fn new(project_id: &XmiId, author_id: &XmiId) -> Self {
        Self {
            project_id: project_id.to_string(),
            label: PROJECT_LABEL.to_string(),
            description: PROJECT_DESCRIPTION.to_string(),
            language: PROJECT_LANGUAGE.to_string(),
            technical_label: PROJECT_TECHNICAL_LABEL.to_string(),
            product_version: PRODUCT_VERSION.to_string(),
            items_relation_version: ITEMS_RELATION_VERSION.to_string(),
            user_id: author_id.to_string(),
            login: EXPORT_USER_LOGIN.to_string(),
        }
    }
}
