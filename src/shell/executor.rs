use std::io::Write;

use tracing::{debug, warn};

use crate::core::commands::{BuiltinRegistry, Command, CommandError, Context, LoopControl};
use crate::input::History;
use crate::process::ProcessLauncher;

/// Routes a token sequence to a builtin or to an external program.
#[derive(Clone, Default)]
pub struct CommandExecutor {
    registry: BuiltinRegistry,
    launcher: ProcessLauncher,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self {
            registry: BuiltinRegistry::new(),
            launcher: ProcessLauncher::new(),
        }
    }

    /// Runs `tokens`, reporting any failure on stderr. Only `exit` yields
    /// `Terminate`.
    pub fn execute(&self, tokens: &[&[u8]], history: &History, out: &mut dyn Write) -> LoopControl {
        match self.try_execute(tokens, history, out) {
            Ok(flow) => flow,
            Err(e) => {
                eprintln!("rtsh: {}", e);
                LoopControl::Continue
            }
        }
    }

    pub fn try_execute(
        &self,
        tokens: &[&[u8]],
        history: &History,
        out: &mut dyn Write,
    ) -> Result<LoopControl, CommandError> {
        let Some(&name) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        if let Some(builtin) = self.registry.get(name) {
            debug!(command = builtin.name(), "running builtin");
            let mut ctx = Context {
                history,
                builtins: self.registry.names(),
                out,
            };
            return builtin.execute(tokens, &mut ctx);
        }

        debug!(command = %String::from_utf8_lossy(name), "launching external program");
        if let Err(e) = out.flush() {
            warn!(error = %e, "failed to flush output before launch");
        }
        Ok(self.launcher.launch(tokens)?)
    }
}
