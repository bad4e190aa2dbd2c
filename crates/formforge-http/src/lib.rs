//! # formforge-http
//!
//! The REST surface of formforge, built on axum. Owner-scoped routes
//! authenticate with a bearer token resolved through the
//! [`Authenticator`](formforge_auth::Authenticator) seam; the submission
//! routes are public and keyed by share URL.
//!
//! | Method | Path                          | Auth  | Purpose                          |
//! |--------|-------------------------------|-------|----------------------------------|
//! | GET    | /api/stats                    | owner | aggregate visit/submission stats |
//! | POST   | /api/forms                    | owner | create a form                    |
//! | GET    | /api/forms                    | owner | list forms, newest first         |
//! | GET    | /api/forms/{id}               | owner | fetch one form                   |
//! | PUT    | /api/forms/{id}/content       | owner | save the serialized document     |
//! | POST   | /api/forms/{id}/publish       | owner | publish (one-way)                |
//! | GET    | /api/forms/{id}/submissions   | owner | form plus all submissions        |
//! | GET    | /api/submit/{share_url}       | none  | fetch content, count a visit     |
//! | POST   | /api/submit/{share_url}       | none  | validate and store a submission  |

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use formforge_auth::Authenticator;
use formforge_store::FormStore;

pub use error::{ApiError, ApiResult};

/// Shared application state: the persistence and identity collaborators.
pub struct AppState {
    /// The persistence boundary.
    pub store: Arc<dyn FormStore>,
    /// The identity boundary.
    pub auth: Arc<dyn Authenticator>,
}

impl AppState {
    /// Bundles the collaborators into shared state.
    pub fn new(store: Arc<dyn FormStore>, auth: Arc<dyn Authenticator>) -> Self {
        Self { store, auth }
    }
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/stats", get(handlers::stats))
        .route(
            "/api/forms",
            get(handlers::list_forms).post(handlers::create_form),
        )
        .route("/api/forms/{id}", get(handlers::get_form))
        .route("/api/forms/{id}/content", put(handlers::update_content))
        .route("/api/forms/{id}/publish", post(handlers::publish_form))
        .route("/api/forms/{id}/submissions", get(handlers::submissions))
        .route(
            "/api/submit/{share_url}",
            get(handlers::visit).post(handlers::submit),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
