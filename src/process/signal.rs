use std::io::{self, Write};

use tracing::debug;

use crate::error::ShellError;

pub const INTERRUPT_REMINDER: &str = "Use 'exit' to exit the shell";

/// Text printed on an interrupt. When the shell was waiting at the prompt
/// the terminal has already discarded the partial line, so `prompt` is
/// drawn again after the reminder.
pub fn interrupt_notice(prompt: Option<&str>) -> String {
    format!("\n{}\n{}", INTERRUPT_REMINDER, prompt.unwrap_or(""))
}

/// Keeps an interrupt from killing the shell itself. A foreground child
/// still receives the signal from the terminal and dies as usual; `exec`
/// resets the handler to the default in every child.
///
/// `notice` runs on the handler thread and produces what to print.
pub fn install_interrupt_handler<F>(notice: F) -> Result<(), ShellError>
where
    F: Fn() -> String + Send + 'static,
{
    ctrlc::set_handler(move || {
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(notice().as_bytes()).and_then(|_| out.flush()) {
            debug!(error = %e, "failed to write interrupt notice");
        }
    })?;
    Ok(())
}

/// Name of `signal` (e.g. `SIGSEGV`), falling back to its number.
pub fn signal_name(signal: i32) -> String {
    signal_hook::low_level::signal_name(signal)
        .map(str::to_string)
        .unwrap_or_else(|| format!("signal {}", signal))
}
