use std::fs;

use talendroutine::{Dependency, ManifestConfig, generate_manifest};
use tempfile::TempDir;

#[test]
fn generate_manifest_writes_into_missing_directory() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("nested/out");
    let mut config = ManifestConfig::new("Foo", &out);
    config.version = "2.1".to_string();
    let deps = vec![
        Dependency::new("g", "bar", "1.0", "compile", "jar"),
        Dependency::new("g", "junit", "4.13", "test", "jar"),
        Dependency::new("g", "parent", "1.0", "compile", "pom"),
    ];

    let outcome = generate_manifest(&config, &deps).unwrap();

    assert_eq!(outcome.properties_path, out.join("Foo_2.1.properties"));
    assert_eq!(outcome.project_path, out.join("talend.project"));
    assert_eq!(outcome.import_count, 1);
    assert!(outcome.author_id.is_generated());

    let properties = fs::read_to_string(&outcome.properties_path).unwrap();
    assert!(properties.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert_eq!(properties.matches("<imports ").count(), 1);
    assert!(properties.contains(r#"mODULE="bar-1.0.jar" nAME="bar" rEQUIRED="true" />"#));

    let project = fs::read_to_string(&outcome.project_path).unwrap();
    assert!(project.contains(&format!(r#"<TalendProperties:User xmi:id="{}""#, outcome.author_id)));
}
