//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment, Jail,
};
use gate_config::GateConfig;

#[test]
fn loads_sso_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[sso]
base_url = "http://localhost:5001/api/v1"
timeout_secs = 5
"#,
        )?;

        let config: GateConfig = Figment::from(Serialized::defaults(GateConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.sso.base_url, "http://localhost:5001/api/v1");
        assert_eq!(config.sso.timeout_secs, 5);
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[sso]
base_url = "https://sso.staging.example.com/api/v1"

[server]
host = "127.0.0.1"
port = 9900

[usage]
enabled = true
"#,
        )?;

        let config: GateConfig = Figment::from(Serialized::defaults(GateConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.sso.base_url,
            "https://sso.staging.example.com/api/v1"
        );
        // Section default survives when the key is omitted
        assert_eq!(config.sso.timeout_secs, 30);
        assert_eq!(config.server.bind_addr(), "127.0.0.1:9900");
        assert!(config.usage.enabled);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("GATEHOUSE_SSO__BASE_URL", "http://from-env:6001/api/v1");

        jail.create_file(
            "config.toml",
            r#"
[sso]
base_url = "http://from-toml:6001/api/v1"
timeout_secs = 10
"#,
        )?;

        let config: GateConfig = Figment::from(Serialized::defaults(GateConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("GATEHOUSE_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.sso.base_url, "http://from-env:6001/api/v1");
        // TOML value not overridden by env should remain
        assert_eq!(config.sso.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("GATEHOUSE_SERVER__PORT", "7171");

        // No TOML file -- just defaults + env
        let config: GateConfig = Figment::from(Serialized::defaults(GateConfig::default()))
            .merge(Env::prefixed("GATEHOUSE_").split("__"))
            .extract()?;

        assert_eq!(config.server.port, 7171);
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently ignored.
/// The value stays at its default because figment doesn't know "base_urll"
/// should be "base_url".
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("GATEHOUSE_SSO__BASE_URLL", "http://typo:6001");

        let config: GateConfig = Figment::from(Serialized::defaults(GateConfig::default()))
            .merge(Env::prefixed("GATEHOUSE_").split("__"))
            .extract()?;

        assert_eq!(
            config.sso.base_url, "https://sso.gatehouse.example.com/api/v1",
            "typo'd env var should be silently ignored by figment"
        );
        Ok(())
    });
}
