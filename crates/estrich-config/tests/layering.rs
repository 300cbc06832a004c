//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for sandboxed working directory and env var changes.

use estrich_config::{ConfigError, EstrichConfig};
use estrich_core::IntendedUse;
use figment::Jail;
use pretty_assertions::assert_eq;
use std::path::Path;

fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().join("xdg");
    jail.set_env("XDG_CONFIG_HOME", dir.display());
}

#[test]
fn project_config_is_loaded() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".estrich")?;
        jail.create_file(
            ".estrich/config.toml",
            r#"
[general]
default_format = "table"

[evaluation]
fail_on_nonconformity = true

[designation]
intended_use = "wearing_surface"
"#,
        )?;

        let config = EstrichConfig::load(None).expect("config loads");
        assert_eq!(config.general.default_format, "table");
        assert!(config.evaluation.fail_on_nonconformity);
        assert_eq!(
            config.designation.intended_use().unwrap(),
            IntendedUse::WearingSurface
        );
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".estrich")?;
        jail.create_file(
            ".estrich/config.toml",
            "[general]\ndefault_format = \"table\"\n",
        )?;
        jail.create_file("lab.toml", "[general]\ndefault_format = \"raw\"\n")?;

        let config = EstrichConfig::load(Some(Path::new("lab.toml"))).expect("config loads");
        assert_eq!(config.general.default_format, "raw");
        Ok(())
    });
}

#[test]
fn env_beats_files() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            "lab.toml",
            "[evaluation]\nfail_on_nonconformity = false\n",
        )?;
        jail.set_env("ESTRICH_EVALUATION__FAIL_ON_NONCONFORMITY", "true");
        jail.set_env("ESTRICH_GENERAL__COLOR", "never");

        let config = EstrichConfig::load(Some(Path::new("lab.toml"))).expect("config loads");
        assert!(config.evaluation.fail_on_nonconformity);
        assert_eq!(config.general.color, "never");
        Ok(())
    });
}

#[test]
fn invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("ESTRICH_DESIGNATION__INTENDED_USE", "roof");

        let err = EstrichConfig::load(None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "designation.intended_use"
        ));
        Ok(())
    });
}

#[test]
fn defaults_without_any_source() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        let config = EstrichConfig::load(None).expect("config loads");
        assert_eq!(config.general.default_format, "json");
        assert_eq!(config.general.color, "auto");
        assert!(!config.evaluation.fail_on_nonconformity);
        Ok(())
    });
}
