//! Embedded minijinja templates for the Talend export documents.

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, Value};

use crate::domain::AppError;

static TALEND_ASSETS: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/talend");

pub const PROPERTIES_TEMPLATE: &str = "routine.properties.j2";
pub const PROJECT_TEMPLATE: &str = "talend.project.j2";
pub const CONFIG_TEMPLATE: &str = "talendroutine.toml";

/// Raw content of an embedded asset.
pub fn asset_content(name: &str) -> Result<&'static str, AppError> {
    let file = TALEND_ASSETS
        .get_file(name)
        .ok_or_else(|| AppError::InternalError(format!("Missing embedded asset '{}'", name)))?;
    file.contents_utf8()
        .ok_or_else(|| AppError::InternalError(format!("Embedded asset '{}' is not UTF-8", name)))
}

/// Build the environment holding both document templates.
///
/// Values are written verbatim: auto-escaping is off and block tags swallow
/// their own line ending so each `imports` entry renders as one line.
pub fn build_template_environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    for name in [PROPERTIES_TEMPLATE, PROJECT_TEMPLATE] {
        env.add_template(name, asset_content(name)?).map_err(|e| {
            AppError::InternalError(format!("Failed to register template '{}': {}", name, e))
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|e| {
        AppError::InternalError(format!("Failed to load template '{}': {}", template_name, e))
    })?;

    template.render(ctx).map_err(|e| {
        AppError::InternalError(format!("Failed to render template '{}': {}", template_name, e))
    })
}
