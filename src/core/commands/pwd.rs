use std::io::Write;

use super::{Command, CommandError, Context, LoopControl};

#[derive(Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, _args: &[&[u8]], ctx: &mut Context<'_>) -> Result<LoopControl, CommandError> {
        let dir = std::env::current_dir().map_err(CommandError::CurrentDir)?;
        writeln!(ctx.out, "{}", dir.display()).map_err(|e| CommandError::Output("pwd", e))?;
        Ok(LoopControl::Continue)
    }
}
