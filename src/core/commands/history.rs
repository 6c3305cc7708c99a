use std::io::Write;

use super::{Command, CommandError, Context, LoopControl};

#[derive(Clone)]
pub struct HistoryCommand;

impl Default for HistoryCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn execute(&self, _args: &[&[u8]], ctx: &mut Context<'_>) -> Result<LoopControl, CommandError> {
        for (number, line) in ctx.history.numbered() {
            write!(ctx.out, "{:5}  ", number)
                .and_then(|_| ctx.out.write_all(line))
                .and_then(|_| ctx.out.write_all(b"\n"))
                .map_err(|e| CommandError::Output("history", e))?;
        }
        Ok(LoopControl::Continue)
    }
}
