use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

mod cd;
mod clear;
mod exit;
mod help;
mod history;
mod pwd;

pub use cd::CdCommand;
pub use clear::ClearCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use pwd::PwdCommand;

use crate::input::History;
use crate::process::ProcessError;

/// Whether the session loop should prompt again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Terminate,
}

impl LoopControl {
    pub fn should_continue(self) -> bool {
        self == LoopControl::Continue
    }
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("cd: HOME not set")]
    HomeNotSet,

    #[error("cd: OLDPWD not set")]
    OldPwdNotSet,

    #[error("cd: {}: {source}", .path.display())]
    ChangeDir { path: PathBuf, source: io::Error },

    #[error("pwd: {0}")]
    CurrentDir(io::Error),

    #[error("{0}: write error: {1}")]
    Output(&'static str, io::Error),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// What a builtin may touch while it runs.
pub struct Context<'a> {
    pub history: &'a History,
    pub builtins: &'a [&'static str],
    pub out: &'a mut dyn Write,
}

pub trait Command {
    fn name(&self) -> &'static str;

    /// `args` is the full token sequence; `args[0]` is the command name.
    fn execute(&self, args: &[&[u8]], ctx: &mut Context<'_>) -> Result<LoopControl, CommandError>;
}

#[derive(Clone)]
pub enum CommandType {
    Cd(CdCommand),
    Pwd(PwdCommand),
    Help(HelpCommand),
    History(HistoryCommand),
    Clear(ClearCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn name(&self) -> &'static str {
        match self {
            CommandType::Cd(cmd) => cmd.name(),
            CommandType::Pwd(cmd) => cmd.name(),
            CommandType::Help(cmd) => cmd.name(),
            CommandType::History(cmd) => cmd.name(),
            CommandType::Clear(cmd) => cmd.name(),
            CommandType::Exit(cmd) => cmd.name(),
        }
    }

    fn execute(&self, args: &[&[u8]], ctx: &mut Context<'_>) -> Result<LoopControl, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Pwd(cmd) => cmd.execute(args, ctx),
            CommandType::Help(cmd) => cmd.execute(args, ctx),
            CommandType::History(cmd) => cmd.execute(args, ctx),
            CommandType::Clear(cmd) => cmd.execute(args, ctx),
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// The fixed set of builtins, in the order `help` lists them.
#[derive(Clone)]
pub struct BuiltinRegistry {
    commands: Vec<CommandType>,
    names: Vec<&'static str>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let commands = vec![
            CommandType::Cd(CdCommand::new()),
            CommandType::Pwd(PwdCommand::new()),
            CommandType::Help(HelpCommand::new()),
            CommandType::History(HistoryCommand::new()),
            CommandType::Clear(ClearCommand::new()),
            CommandType::Exit(ExitCommand::new()),
        ];
        let names = commands.iter().map(Command::name).collect();

        Self { commands, names }
    }

    /// Case-sensitive exact match on the command name.
    pub fn get(&self, name: &[u8]) -> Option<&CommandType> {
        self.commands
            .iter()
            .find(|cmd| cmd.name().as_bytes() == name)
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_in_order() {
        let registry = BuiltinRegistry::new();
        assert_eq!(
            registry.names(),
            &["cd", "pwd", "help", "history", "clear", "exit"]
        );
    }

    #[test]
    fn test_builtin_command_detection() {
        let registry = BuiltinRegistry::new();

        assert!(registry.get(b"cd").is_some());
        assert!(registry.get(b"exit").is_some());
        assert!(registry.get(b"CD").is_none());
        assert!(registry.get(b"exit ").is_none());
        assert!(registry.get(b"ls").is_none());
        assert!(registry.get(b"").is_none());
        assert!(registry.get(b"cd\xff").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let registry = BuiltinRegistry::new();
        let mut names = registry.names().to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), registry.names().len());
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::HomeNotSet,
            CommandError::OldPwdNotSet,
            CommandError::ChangeDir {
                path: PathBuf::from("/nope"),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            },
            CommandError::CurrentDir(io::Error::new(io::ErrorKind::NotFound, "gone")),
        ];

        for error in errors {
            let message = error.to_string();
            assert!(message.starts_with("cd: ") || message.starts_with("pwd: "));
        }
    }

    #[test]
    fn test_loop_control() {
        assert!(LoopControl::Continue.should_continue());
        assert!(!LoopControl::Terminate.should_continue());
    }
}
