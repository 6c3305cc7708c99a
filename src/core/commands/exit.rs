use super::{Command, CommandError, Context, LoopControl};

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _args: &[&[u8]], _ctx: &mut Context<'_>) -> Result<LoopControl, CommandError> {
        Ok(LoopControl::Terminate)
    }
}
