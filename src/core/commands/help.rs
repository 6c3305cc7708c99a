use std::io::Write;

use super::{Command, CommandError, Context, LoopControl};

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }

    fn banner(builtins: &[&str]) -> String {
        let mut text = format!("rtsh {}\n", env!("CARGO_PKG_VERSION"));
        text.push_str("Type program names and arguments, and hit enter.\n");
        text.push_str("The following are built in:\n");
        for name in builtins {
            text.push_str("  ");
            text.push_str(name);
            text.push('\n');
        }
        text.push_str("Use the man command for information on other programs.\n");
        text
    }
}

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _args: &[&[u8]], ctx: &mut Context<'_>) -> Result<LoopControl, CommandError> {
        ctx.out
            .write_all(Self::banner(ctx.builtins).as_bytes())
            .map_err(|e| CommandError::Output("help", e))?;
        Ok(LoopControl::Continue)
    }
}
