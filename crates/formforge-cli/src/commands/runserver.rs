//! The `runserver` command.

use std::sync::Arc;

use async_trait::async_trait;
use formforge_auth::TokenAuthenticator;
use formforge_core::{FormForgeError, Settings};
use formforge_http::{router, AppState};
use formforge_store::{FormStore, MemoryStore, SqliteStore};

use crate::command::ManagementCommand;

/// Starts the HTTP server.
///
/// Binds to `settings.bind_addr` unless `--addr` overrides it. The store
/// backend follows `settings.database.engine`: `"sqlite"` persists to the
/// configured file, `"memory"` holds everything in process.
pub struct RunserverCommand;

#[async_trait]
impl ManagementCommand for RunserverCommand {
    fn name(&self) -> &'static str {
        "runserver"
    }

    fn help(&self) -> &'static str {
        "Starts the formforge API server"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("addr")
                .long("addr")
                .help("Address to bind to (overrides the settings file)"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), FormForgeError> {
        settings.validate()?;

        let addr = matches
            .get_one::<String>("addr")
            .map_or(settings.bind_addr.as_str(), String::as_str);

        let store: Arc<dyn FormStore> = match settings.database.engine.as_str() {
            "memory" => Arc::new(MemoryStore::new()),
            _ => Arc::new(SqliteStore::open(&settings.database.name)?),
        };
        let auth = Arc::new(TokenAuthenticator::new(settings.secret_key.clone()));
        let app = router(AppState::new(store, auth));

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            FormForgeError::ConfigurationError(format!("cannot bind {addr}: {e}"))
        })?;
        tracing::info!(
            "Starting formforge server at http://{addr}/ (debug={})",
            settings.debug
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| FormForgeError::ConfigurationError(e.to_string()))
    }
}
