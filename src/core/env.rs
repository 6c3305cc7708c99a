//! Environment variables the shell reads and writes.

use std::env;
use std::ffi::OsString;
use std::path::Path;

pub const HOME: &str = "HOME";
pub const OLDPWD: &str = "OLDPWD";
pub const USER: &str = "USER";

/// Used in the prompt when `USER` is unset.
pub const FALLBACK_USER: &str = "anonymous";

/// Non-empty value of `name`, if any.
fn non_empty(name: &str) -> Option<OsString> {
    env::var_os(name).filter(|v| !v.is_empty())
}

pub fn home() -> Option<OsString> {
    non_empty(HOME)
}

pub fn old_pwd() -> Option<OsString> {
    non_empty(OLDPWD)
}

pub fn set_old_pwd(dir: &Path) {
    env::set_var(OLDPWD, dir);
}

pub fn user() -> String {
    non_empty(USER)
        .map(|user| user.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_USER.to_string())
}
