//! Generate command - writes the routine manifest and its project file.

use std::path::PathBuf;

use minijinja::Value;
use tracing::{debug, warn};

use crate::adapters::templates::{
    PROJECT_TEMPLATE, PROPERTIES_TEMPLATE, build_template_environment, render_template_by_name,
};
use crate::app::AppContext;
use crate::domain::talend::PROJECT_FILE_NAME;
use crate::domain::{
    AppError, Dependency, ManifestConfig, ManifestIds, ProjectDocument, PropertiesDocument, XmiId,
    format_timestamp,
};
use crate::ports::{ArtifactStore, Clock, IdGenerator};

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub properties_path: PathBuf,
    pub project_path: PathBuf,
    /// Number of `imports` entries written.
    pub import_count: usize,
    /// Id shared by the manifest's `author` reference and the project's `User`.
    pub author_id: XmiId,
}

/// Execute the generate command.
///
/// Writes `{output_dir}/{label}_{version}.properties` and
/// `{output_dir}/talend.project`. Both files are attempted; the first write
/// failure is returned.
pub fn execute<I, C, S>(
    ctx: &AppContext<I, C, S>,
    config: &ManifestConfig,
    dependencies: &[Dependency],
) -> Result<GenerateOutcome, AppError>
where
    I: IdGenerator,
    C: Clock,
    S: ArtifactStore,
{
    if let Err(e) = ctx.store().ensure_dir(&config.output_dir) {
        debug!(dir = %config.output_dir.display(), error = %e, "could not create output directory");
    }

    let filename = config.properties_file_name();
    let ids = ManifestIds {
        property: ctx.ids().next_id(),
        routine: ctx.ids().next_id(),
        state: ctx.ids().next_id(),
        author: ctx.ids().next_id(),
    };
    debug!(filename = %filename, xmi_id = %ids.property, "generating routine manifest");

    let timestamp = format_timestamp(&ctx.clock().now());

    let properties =
        PropertiesDocument::new(config, dependencies, &ids, &timestamp, || ctx.ids().next_id());
    for entry in &properties.imports {
        debug!(jar_name = %entry.module, "adding routine import");
    }
    let project = ProjectDocument::new(&ctx.ids().next_id(), &ids.author);

    let env = build_template_environment()?;
    let properties_xml =
        render_template_by_name(&env, PROPERTIES_TEMPLATE, &Value::from_serialize(&properties))?;
    let project_xml =
        render_template_by_name(&env, PROJECT_TEMPLATE, &Value::from_serialize(&project))?;

    let properties_path = config.output_dir.join(&filename);
    let project_path = config.output_dir.join(PROJECT_FILE_NAME);

    let properties_result = ctx.store().write_artifact(&properties_path, &properties_xml);
    let project_result = ctx.store().write_artifact(&project_path, &project_xml);

    match (properties_result, project_result) {
        (Ok(()), Ok(())) => {}
        (Err(first), Err(second)) => {
            warn!(error = %second, "project file was not written either");
            return Err(first);
        }
        (Err(e), Ok(())) | (Ok(()), Err(e)) => return Err(e),
    }

    Ok(GenerateOutcome {
        properties_path,
        project_path,
        import_count: properties.imports.len(),
        author_id: ids.author,
    })
}
