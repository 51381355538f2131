use std::fs;
use tempfile::TempDir;

use relenv::types::env::keys;
use relenv::{BuildEnv, DescriptorSet, EnvToml, RegisterOptions, Registration};

#[test]
fn test_generate_from_manifest() {
    let temp_dir = TempDir::new().unwrap();

    let manifest_toml = r#"
[platform]
name = "win32"
container = "GlastRelease"

[libs]
gaudi = ["GaudiKernel", "GaudiSvc"]
root = ["Core", "Tree", "Hist"]
"#;
    fs::write(temp_dir.path().join("relenv.toml"), manifest_toml).unwrap();

    let manifest = EnvToml::load_from_dir(temp_dir.path()).unwrap();
    manifest.validate().unwrap();

    let mut env = BuildEnv::from_manifest(&manifest);
    assert_eq!(env.get_str(keys::PLATFORM).unwrap(), "win32");

    let set = DescriptorSet::with_builtin_descriptors();
    let taken = set
        .generate_for("ntupleWriterSvc", &mut env, &RegisterOptions::default())
        .unwrap();

    // own library, pkg path (win32 container build), facilities pull,
    // gaudi list, root list
    assert_eq!(taken.len(), 5);
    assert_eq!(
        taken[1],
        Registration::PackagePath {
            package: "ntupleWriterSvc".to_string()
        }
    );
    assert_eq!(
        env.state().linked_libraries,
        vec![
            "ntupleWriterSvc",
            "facilities",
            "GaudiKernel",
            "GaudiSvc",
            "Core",
            "Tree",
            "Hist"
        ]
    );
}

#[test]
fn test_generate_deps_only_from_default_manifest() {
    let manifest = EnvToml::default();
    let mut env = BuildEnv::from_manifest(&manifest);

    let set = DescriptorSet::with_builtin_descriptors();
    let taken = set
        .generate_for(
            "ntupleWriterSvc",
            &mut env,
            &RegisterOptions::new().deps_only(true),
        )
        .unwrap();

    assert_eq!(
        taken[0],
        Registration::PackageDeps {
            package: "facilities".to_string()
        }
    );
    assert!(!env
        .state()
        .linked_libraries
        .contains(&"ntupleWriterSvc".to_string()));
    assert!(env.state().package_paths.is_empty());
}
