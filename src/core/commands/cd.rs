use std::ffi::OsStr;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::{Command, CommandError, Context, LoopControl};
use crate::core::env;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }

    /// Resolves the target directory and whether it should be echoed.
    fn target(arg: Option<&[u8]>) -> Result<(PathBuf, bool), CommandError> {
        match arg {
            None | Some(b"~") => Ok((env::home().ok_or(CommandError::HomeNotSet)?.into(), false)),
            Some(b"-") => Ok((env::old_pwd().ok_or(CommandError::OldPwdNotSet)?.into(), true)),
            Some(path) => Ok((PathBuf::from(OsStr::from_bytes(path)), false)),
        }
    }
}

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, args: &[&[u8]], ctx: &mut Context<'_>) -> Result<LoopControl, CommandError> {
        let (target, echo) = Self::target(args.get(1).copied())?;

        let previous = std::env::current_dir();
        if let Err(e) = &previous {
            warn!(error = %e, "cannot query current directory, OLDPWD left unchanged");
        }

        std::env::set_current_dir(&target).map_err(|source| CommandError::ChangeDir {
            path: target.clone(),
            source,
        })?;

        if let Ok(previous) = previous {
            env::set_old_pwd(&previous);
        }
        debug!(target = %target.display(), "changed directory");

        if echo {
            ctx.out
                .write_all(target.as_os_str().as_bytes())
                .and_then(|_| ctx.out.write_all(b"\n"))
                .map_err(|e| CommandError::Output("cd", e))?;
        }
        Ok(LoopControl::Continue)
    }
}
