#[cfg(test)]
mod tests {
    use crate::errors::{EnvTomlError, ValidationResult};
    use crate::types::env_toml::EnvToml;

    #[test]
    fn test_validate_package_name_valid() {
        assert!(matches!(
            EnvToml::validate_package_name("ntupleWriterSvc"),
            ValidationResult::Valid
        ));
        assert!(matches!(
            EnvToml::validate_package_name("GaudiKernel"),
            ValidationResult::Valid
        ));
        assert!(matches!(
            EnvToml::validate_package_name("lib-101"),
            ValidationResult::Valid
        ));
    }

    #[test]
    fn test_validate_package_name_invalid() {
        assert!(matches!(
            EnvToml::validate_package_name("a library"),
            ValidationResult::Invalid(_)
        ));
        assert!(matches!(
            EnvToml::validate_package_name("1lib"),
            ValidationResult::Invalid(_)
        ));
        assert!(matches!(
            EnvToml::validate_package_name(""),
            ValidationResult::Invalid(_)
        ));
    }

    #[test]
    fn test_default() {
        let manifest = EnvToml::default();
        assert_eq!(manifest.platform.name, "linux");
        assert_eq!(manifest.platform.container, None);
        assert_eq!(manifest.libs.gaudi, vec!["GaudiKernel".to_string()]);
        assert!(manifest.libs.root.contains(&"Core".to_string()));
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let manifest = EnvToml::default();
        let toml_str = manifest.to_toml().unwrap();
        let deserialized = EnvToml::from_toml(&toml_str).unwrap();
        assert_eq!(manifest.platform, deserialized.platform);
        assert_eq!(manifest.libs, deserialized.libs);
    }

    #[test]
    fn test_from_string() {
        let raw = r#"
[platform]
name = "win32"
container = "GlastRelease"

[libs]
gaudi = ["GaudiKernel", "GaudiSvc"]
root = ["Core", "Tree"]
"#;
        let manifest = EnvToml::from_string(raw.to_string()).unwrap();
        assert_eq!(manifest.platform.name, "win32");
        assert_eq!(
            manifest.platform.container.as_deref(),
            Some("GlastRelease")
        );
        assert_eq!(manifest.libs.gaudi.len(), 2);
        assert_eq!(manifest.raw, raw);
    }

    #[test]
    fn test_from_string_empty() {
        assert!(matches!(
            EnvToml::from_string("  \n".to_string()),
            Err(EnvTomlError::EmptyFile)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_library_name() {
        let mut manifest = EnvToml::default();
        manifest.libs.root.push("no spaces allowed".to_string());
        assert!(matches!(
            manifest.validate(),
            Err(EnvTomlError::InvalidPackageName(_))
        ));
    }

    #[test]
    fn test_write_to_dir() {
        use std::fs;
        let temp_dir = std::env::temp_dir().join("relenv_test_write");
        fs::create_dir_all(&temp_dir).unwrap();

        let manifest = EnvToml::default();
        manifest.write_to_dir(&temp_dir).unwrap();

        let file_path = temp_dir.join("relenv.toml");
        assert!(file_path.exists());
        assert!(fs::read_to_string(file_path).unwrap().contains("[platform]"));

        fs::remove_dir_all(temp_dir).unwrap();
    }

    #[test]
    fn test_load_from_dir() {
        use std::fs;
        let temp_dir = std::env::temp_dir().join("relenv_test_load");
        fs::create_dir_all(&temp_dir).unwrap();

        let sample_toml = r#"
[platform]
name = "darwin"

[libs]
gaudi = ["GaudiKernel"]
root = ["Core"]
"#;
        fs::write(temp_dir.join("relenv.toml"), sample_toml).unwrap();

        let manifest = EnvToml::load_from_dir(&temp_dir).unwrap();
        assert_eq!(manifest.platform.name, "darwin");
        assert_eq!(manifest.platform.container, None);

        fs::remove_dir_all(temp_dir).unwrap();
    }

    #[test]
    fn test_load_from_dir_missing() {
        let temp_dir = std::env::temp_dir().join("relenv_test_missing");
        std::fs::create_dir_all(&temp_dir).unwrap();
        assert!(matches!(
            EnvToml::load_from_dir(&temp_dir),
            Err(EnvTomlError::NotFound)
        ));
        std::fs::remove_dir_all(temp_dir).unwrap();
    }
}
