//! Loads configuration through the file and environment layers.
//!
//! Everything that touches process environment lives in a single test so nothing in this
//! binary races on it.

use std::env;

use voyage_core::Route;
use voyage_infra::{Config, ConfigError};

const OVERRIDES: [(&str, &str); 3] = [
    ("VOYAGE__SERVER__HOST", "http://10.0.2.2"),
    ("VOYAGE__SERVER__PORT", "4242"),
    ("VOYAGE__GATEWAY__PUBLISHABLE_KEY", "pk_env"),
];

/// Sets the given variables and removes them again when dropped.
struct ScopedEnv(Vec<&'static str>);

impl ScopedEnv {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (key, value) in vars {
            env::set_var(key, value);
        }
        Self(vars.iter().map(|(key, _)| *key).collect())
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for key in &self.0 {
            env::remove_var(key);
        }
    }
}

fn repo_config_dir() -> String {
    format!("{}/../config", env!("CARGO_MANIFEST_DIR"))
}

fn missing_dir() -> String {
    format!("{}/no-such-config-dir", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_files_then_environment() {
    env::remove_var("RUN_MODE");
    for (key, _) in OVERRIDES {
        env::remove_var(key);
    }

    // Files alone: host and key only exist in config/default.toml
    let from_files = Config::load_from_dir(&repo_config_dir()).unwrap();
    assert_eq!(
        from_files.server.intent_endpoint(),
        "http://localhost:3000/create-payment-intent"
    );
    assert_eq!(from_files.gateway.publishable_key.expose(), "pk_test_change_me");
    assert_eq!(from_files.booking.confirmation_route().unwrap(), Route::TripHome);

    // No files and no environment: required keys are missing
    let err = Config::load_from_dir(&missing_dir()).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)), "got {:?}", err);

    let _env = ScopedEnv::set(&OVERRIDES);

    // Environment alone is enough when the file tree is missing
    let from_env = Config::load_from_dir(&missing_dir()).unwrap();
    assert_eq!(
        from_env.server.intent_endpoint(),
        "http://10.0.2.2:4242/create-payment-intent"
    );
    assert_eq!(from_env.gateway.publishable_key.expose(), "pk_env");
    assert_eq!(from_env.booking.intent_request().amount, 65900);

    // Environment wins over the files
    let layered = Config::load_from_dir(&repo_config_dir()).unwrap();
    assert_eq!(
        layered.server.intent_endpoint(),
        "http://10.0.2.2:4242/create-payment-intent"
    );
    assert_eq!(layered.gateway.publishable_key.expose(), "pk_env");
    assert_eq!(layered.server.timeout_secs, 30);
}
