use clap::Parser;

/// rtsh - a minimal interactive shell
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rtsh", version, about)]
pub struct Flags {
    /// Do not print the prompt
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Render the prompt without colours
    #[arg(long)]
    pub no_color: bool,

    /// Run a single command line and exit
    #[arg(short = 'c', value_name = "COMMAND")]
    pub command: Option<String>,
}

impl Flags {
    /// Default log filter, used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}
