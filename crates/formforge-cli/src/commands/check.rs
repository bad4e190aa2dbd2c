//! The `check` command.

use async_trait::async_trait;
use formforge_core::{FormForgeError, Settings};

use crate::command::ManagementCommand;

/// Validates the loaded settings without starting anything.
pub struct CheckCommand;

#[async_trait]
impl ManagementCommand for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn help(&self) -> &'static str {
        "Checks the configuration for problems"
    }

    async fn handle(
        &self,
        _matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), FormForgeError> {
        settings.validate()?;
        println!("Configuration check identified no issues.");
        Ok(())
    }
}
