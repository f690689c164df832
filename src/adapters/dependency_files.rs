//! Loading dependency lists handed over by a build system.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, Dependency};

/// Read a dependency list file.
///
/// `.json` files hold an array of dependency objects; anything else is read
/// as a Maven `dependency:list` listing with one coordinate per line.
pub fn load_dependency_file(path: &Path) -> Result<Vec<Dependency>, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::ParseError {
        what: format!("dependency file {}", path.display()),
        details: e.to_string(),
    })?;

    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&content).map_err(|e| AppError::ParseError {
            what: format!("dependency file {}", path.display()),
            details: e.to_string(),
        })
    } else {
        parse_dependency_listing(&content)
    }
}

/// Parse `mvn dependency:list` style output.
///
/// The coordinate is the first token of each line after the `[INFO]` prefix;
/// trailing annotations such as `(optional)` or `-- module ...` are ignored.
/// Blank lines, `#` comments and lines whose first token is not a coordinate
/// (Maven banners) are skipped.
pub fn parse_dependency_listing(content: &str) -> Result<Vec<Dependency>, AppError> {
    let mut dependencies = Vec::new();

    for raw in content.lines() {
        let line = raw.trim();
        let line = line.strip_prefix("[INFO]").unwrap_or(line);

        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        if token.starts_with('#') || !token.contains(':') {
            continue;
        }

        dependencies.push(Dependency::parse_coordinate(token)?);
    }

    Ok(dependencies)
}
