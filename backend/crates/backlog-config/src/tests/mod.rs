
use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads, cleared so tests start from defaults
const OVERRIDE_VARS: [&str; 15] = [
    "API_HOST",
    "API_PORT",
    "CORS_ORIGINS",
    "AZURE_DEVOPS_PAT",
    "AZURE_DEVOPS_ORGANIZATION",
    "AZURE_DEVOPS_PROJECT",
    "AZURE_DEVOPS_API_URL",
    "AZURE_DEVOPS_API_VERSION",
    "BACKLOG_BATCH_SIZE",
    "BACKLOG_MAX_RESULTS",
    "BACKLOG_OPEN_ENDED",
    "BACKLOG_DIAGNOSTICS_SAMPLE",
    "BACKLOG_LOG_LEVEL",
    "BACKLOG_LOG_COLORED",
    "BACKLOG_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory plus a clean environment.
///
/// Holds the guards so the environment is restored when the test ends.
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = OVERRIDE_VARS.into_iter().map(EnvGuard::remove).collect();
    guards.push(EnvGuard::set(
        "BACKLOG_CONFIG_DIR",
        dir.path().to_str().unwrap(),
    ));

    TestEnv {
        dir,
        _guards: guards,
    }
}
