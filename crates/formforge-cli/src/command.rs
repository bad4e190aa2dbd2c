//! The management command framework.
//!
//! A [`ManagementCommand`] is one verb of the `formforge` binary; the
//! [`CommandRegistry`] collects them, builds the clap CLI, and dispatches
//! execution.

use std::collections::HashMap;

use async_trait::async_trait;
use formforge_core::{FormForgeError, Settings};

/// One subcommand of the `formforge` CLI.
///
/// Implementations declare a name, help text, and optional arguments, and
/// run asynchronously against the loaded [`Settings`].
#[async_trait]
pub trait ManagementCommand: Send + Sync {
    /// The name used to invoke the command.
    fn name(&self) -> &str;

    /// A one-line help description.
    fn help(&self) -> &str;

    /// Adds command-specific arguments. The default adds none.
    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Runs the command.
    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), FormForgeError>;
}

/// The set of registered commands and the dispatcher over them.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn ManagementCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a command, replacing any previous one of the same name.
    pub fn register(&mut self, command: Box<dyn ManagementCommand>) {
        self.commands.insert(command.name().to_string(), command);
    }

    /// Looks up a command by name.
    pub fn get(&self, name: &str) -> Option<&dyn ManagementCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// All registered command names, sorted.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds the top-level clap `Command` with one subcommand per entry.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("formforge")
            .about("formforge management utility")
            .subcommand_required(true);

        let mut entries: Vec<_> = self.commands.iter().collect();
        entries.sort_by_key(|(name, _)| (*name).clone());

        for (name, cmd) in entries {
            let subcmd = clap::Command::new(name.clone()).about(cmd.help().to_string());
            app = app.subcommand(cmd.add_arguments(subcmd));
        }

        app
    }

    /// Dispatches the subcommand selected in `matches`.
    pub async fn execute(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), FormForgeError> {
        let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
            FormForgeError::ConfigurationError("no subcommand specified".to_string())
        })?;
        let cmd = self
            .get(name)
            .ok_or_else(|| FormForgeError::ConfigurationError(format!("unknown command: {name}")))?;
        cmd.handle(sub_matches, settings).await
    }
}
