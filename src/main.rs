use std::io;
use std::process::ExitCode;

use clap::Parser;
use rtsh::flags::Flags;
use rtsh::shell::Shell;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(flags: &Flags) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(flags.log_level()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let flags = Flags::parse();
    init_tracing(&flags);

    let mut shell = Shell::new(&flags);

    let result = match &flags.command {
        Some(command) => {
            shell.run_line(command.as_bytes());
            Ok(())
        }
        None => shell.install_interrupt_handler().and_then(|_| shell.run()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rtsh: {}", e);
            ExitCode::FAILURE
        }
    }
}
