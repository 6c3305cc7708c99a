use std::io::{self, Read, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

mod executor;
mod prompt;

pub use executor::CommandExecutor;
pub use prompt::Prompt;

use crate::{
    core::commands::LoopControl,
    error::ShellError,
    flags::Flags,
    input::{tokenize, History, LineReader, RawStdin},
    process::signal,
};

/// The interactive session: prompt, read, record, tokenize, dispatch.
pub struct Shell<R, W> {
    reader: LineReader<R>,
    out: W,
    history: History,
    executor: CommandExecutor,
    prompt: Option<Prompt>,
    /// Set while blocked reading a line at the prompt.
    at_prompt: Arc<AtomicBool>,
}

impl Shell<RawStdin, Stdout> {
    pub fn new(flags: &Flags) -> Self {
        Self::with_io(RawStdin, io::stdout(), flags)
    }
}

impl<R: Read, W: Write> Shell<R, W> {
    pub fn with_io(input: R, out: W, flags: &Flags) -> Self {
        let prompt = (!flags.quiet).then(|| Prompt::new(!flags.no_color));

        Shell {
            reader: LineReader::new(input),
            out,
            history: History::new(),
            executor: CommandExecutor::new(),
            prompt,
            at_prompt: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Loops until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.show_prompt()?;

            self.at_prompt.store(true, Ordering::SeqCst);
            let line = self.reader.read_line();
            self.at_prompt.store(false, Ordering::SeqCst);

            let Some(line) = line? else {
                debug!("end of input");
                break;
            };

            if !self.run_line(&line).should_continue() {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// One turn of the loop after the line has been read.
    pub fn run_line(&mut self, line: &[u8]) -> LoopControl {
        self.history.record(line);
        let tokens = tokenize(line);
        self.executor.execute(&tokens, &self.history, &mut self.out)
    }

    /// Prints a reminder on Ctrl-C instead of dying, redrawing the prompt
    /// if the interrupt arrived while waiting for input.
    pub fn install_interrupt_handler(&self) -> Result<(), ShellError> {
        let at_prompt = Arc::clone(&self.at_prompt);
        let prompt = self.prompt;
        signal::install_interrupt_handler(move || {
            let redraw = prompt
                .filter(|_| at_prompt.load(Ordering::SeqCst))
                .map(|p| p.render());
            signal::interrupt_notice(redraw.as_deref())
        })
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn show_prompt(&mut self) -> Result<(), ShellError> {
        if let Some(prompt) = &self.prompt {
            write!(self.out, "{}", prompt.render())?;
            self.out.flush()?;
        }
        Ok(())
    }
}
