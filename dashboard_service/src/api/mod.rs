use crate::api::context::AppState;
use axum::{Router, middleware::from_fn, routing::IntoMakeService};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod agencies;
pub mod context;
pub mod document_actions;
pub mod document_types;
pub mod documents;
pub mod error;
pub mod extract;
pub mod health;
pub mod notifications;
pub mod report;
pub mod swagger;
pub mod user_feedbacks;
pub mod users;

type Service = IntoMakeService<Router>;

pub fn service(app_state: AppState) -> Service {
    let cors = CorsLayer::permissive();

    let api = Router::new()
        .merge(documents::router())
        .merge(agencies::router())
        .merge(document_types::router())
        .merge(document_actions::router())
        .merge(users::router())
        .merge(notifications::router())
        .merge(user_feedbacks::router())
        .merge(report::router())
        .layer(from_fn(docflow_auth::require_session));

    let app = Router::new()
        .nest("/api", api)
        .with_state(app_state)
        .merge(health::router().layer(cors.clone()))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()))
        .layer(cors.clone())
        .layer(TraceLayer::new_for_http());

    app.into_make_service()
}
