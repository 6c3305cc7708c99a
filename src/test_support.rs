//! Helpers for tests that touch process-wide state.

use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

const SAVED_VARS: [&str; 3] = ["HOME", "OLDPWD", "USER"];

/// Serialises tests that read or change the cwd or the environment.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the lock and restores the cwd and shell variables on drop.
pub struct SavedProcessState {
    cwd: Option<PathBuf>,
    vars: Vec<(&'static str, Option<String>)>,
    _guard: MutexGuard<'static, ()>,
}

impl SavedProcessState {
    pub fn capture() -> Self {
        let guard = env_lock();
        Self {
            cwd: env::current_dir().ok(),
            vars: SAVED_VARS.iter().map(|&name| (name, env::var(name).ok())).collect(),
            _guard: guard,
        }
    }
}

impl Drop for SavedProcessState {
    fn drop(&mut self) {
        if let Some(cwd) = &self.cwd {
            let _ = env::set_current_dir(cwd);
        }
        for (name, value) in &self.vars {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
    }
}
