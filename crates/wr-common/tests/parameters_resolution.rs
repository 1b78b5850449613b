//! Gateway parameters file resolution against real files and environment.

use std::env;
use std::sync::{Mutex, OnceLock};
use wr_common::config::resolve::{ENV_CONFIG_DIR, ENV_PARAMETERS_PATH, PARAMETERS_FILENAME};
use wr_common::config::{load_parameters, resolve_parameters_path};
use wr_common::{ConfigSource, GatewayCode};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

struct EnvGuard {
    key: String,
    value: Option<String>,
}

impl EnvGuard {
    fn set(key: &str, value: &str) -> Self {
        let saved = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            value: saved,
        }
    }

    fn unset(key: &str) -> Self {
        let saved = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            value: saved,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

fn lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

#[test]
fn env_path_beats_config_dir() {
    let _lock = lock();
    let dir = tempfile::tempdir().unwrap();

    let direct = dir.path().join("direct.json");
    std::fs::write(&direct, r#"{ "gateways": { "GW_0001": { "battery_charge": 10.0 } } }"#).unwrap();
    let in_dir = dir.path().join(PARAMETERS_FILENAME);
    std::fs::write(&in_dir, r#"{ "gateways": { "GW_0001": { "battery_charge": 20.0 } } }"#).unwrap();

    let _p = EnvGuard::set(ENV_PARAMETERS_PATH, direct.to_str().unwrap());
    let _d = EnvGuard::set(ENV_CONFIG_DIR, dir.path().to_str().unwrap());

    let (path, source) = resolve_parameters_path(None);
    assert_eq!(path.as_deref(), Some(direct.as_path()));
    assert_eq!(source, ConfigSource::Environment);

    let (set, _) = load_parameters(None).unwrap();
    assert_eq!(
        set.get(&GatewayCode::new("GW_0001")).battery_charge_percentage(),
        10.0
    );
}

#[test]
fn config_dir_used_when_env_path_missing() {
    let _lock = lock();
    let dir = tempfile::tempdir().unwrap();
    let in_dir = dir.path().join(PARAMETERS_FILENAME);
    std::fs::write(&in_dir, r#"{ "gateways": {} }"#).unwrap();

    let _p = EnvGuard::set(ENV_PARAMETERS_PATH, "/nonexistent/parameters.json");
    let _d = EnvGuard::set(ENV_CONFIG_DIR, dir.path().to_str().unwrap());

    let (path, source) = resolve_parameters_path(None);
    assert_eq!(path.as_deref(), Some(in_dir.as_path()));
    assert_eq!(source, ConfigSource::Environment);
}

#[test]
fn defaults_when_nothing_is_found() {
    let _lock = lock();
    let empty = tempfile::tempdir().unwrap();

    let _p = EnvGuard::unset(ENV_PARAMETERS_PATH);
    let _d = EnvGuard::set(ENV_CONFIG_DIR, empty.path().to_str().unwrap());
    let _x = EnvGuard::set("XDG_CONFIG_HOME", empty.path().to_str().unwrap());

    let (set, source) = load_parameters(None).unwrap();
    assert_eq!(source, ConfigSource::BuiltinDefault);
    assert!(set.gateways.is_empty());
}

#[test]
fn cli_path_errors_surface() {
    let _lock = lock();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let err = load_parameters(Some(&missing)).unwrap_err();
    assert_eq!(err.code(), 60);
}
