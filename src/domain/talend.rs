//! Fixed literals of the Talend Open Studio export format.

/// File name of the project descriptor written next to every routine manifest.
pub const PROJECT_FILE_NAME: &str = "talend.project";

/// Reference to the `Property` type in Talend's properties schema.
pub const PROPERTY_TYPE_ID: &str = "_NkZ6AJEEEeC4zfWT--Xipg";

pub const STATUS_CODE: &str = "PROD";

/// Location of the project file as seen from a routine manifest inside an archive.
pub const AUTHOR_HREF_BASE: &str = "../../../talend.project";

/// Suffix appended to `{label}_{version}` for the routine content reference.
pub const CONTENT_HREF_SUFFIX: &str = ".item#/0";

pub const IMPORT_MESSAGE: &str = "Required for using this routine.";

pub const PROJECT_LABEL: &str = "TALENDPROJECT";
pub const PROJECT_DESCRIPTION: &str = "Project for testing new components";
pub const PROJECT_LANGUAGE: &str = "java";
pub const PROJECT_TECHNICAL_LABEL: &str = "TALENDPROJECT";
pub const PRODUCT_VERSION: &str = "Talend Open Studio-4.2.2.r63143";
pub const ITEMS_RELATION_VERSION: &str = "1.1";
pub const EXPORT_USER_LOGIN: &str = "exportuser@talend.com";

/// `yyyy-MM-dd'T'HH:mm:ss.SSSZ` in chrono notation.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";
