use std::io::Write;

use super::{Command, CommandError, Context, LoopControl};

/// Cursor home, then erase to the end of the screen.
pub const CLEAR_SEQUENCE: &str = "\x1b[H\x1b[J";

#[derive(Clone)]
pub struct ClearCommand;

impl Default for ClearCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _args: &[&[u8]], ctx: &mut Context<'_>) -> Result<LoopControl, CommandError> {
        ctx.out
            .write_all(CLEAR_SEQUENCE.as_bytes())
            .and_then(|_| ctx.out.flush())
            .map_err(|e| CommandError::Output("clear", e))?;
        Ok(LoopControl::Continue)
    }
}
