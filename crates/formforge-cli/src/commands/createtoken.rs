//! The `createtoken` command.

use async_trait::async_trait;
use formforge_auth::{TokenAuthenticator, User};
use formforge_core::{FormForgeError, Settings};

use crate::command::ManagementCommand;

/// Issues a signed bearer token for a user.
///
/// The server is stateless about identity, so handing someone a token is
/// all it takes to onboard them.
pub struct CreatetokenCommand;

#[async_trait]
impl ManagementCommand for CreatetokenCommand {
    fn name(&self) -> &'static str {
        "createtoken"
    }

    fn help(&self) -> &'static str {
        "Issues a signed bearer token for a user"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("id")
                .long("id")
                .required(true)
                .help("User id the token authenticates as"),
        )
        .arg(
            clap::Arg::new("username")
                .long("username")
                .required(true)
                .help("Display name for the user"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), FormForgeError> {
        settings.validate()?;

        let id = matches
            .get_one::<String>("id")
            .ok_or_else(|| FormForgeError::ConfigurationError("missing --id".to_string()))?;
        let username = matches
            .get_one::<String>("username")
            .ok_or_else(|| FormForgeError::ConfigurationError("missing --username".to_string()))?;

        let auth = TokenAuthenticator::new(settings.secret_key.clone());
        let token = auth.issue(&User::new(id, username));
        println!("{token}");
        Ok(())
    }
}
