use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::Settings, routes};

pub fn create(app_state: AppState, config: &Settings) -> Router<()> {
    let base_app = Router::new()
        .route("/", get(|| async { "Issue tracker is up" }))
        .nest("/api/issues", routes::issues::router());

    // An empty origin list means the API is open to any origin
    let allowed_origins = config.application.allowed_origins.clone();
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::predicate(move |origin, _| {
            let origin_str = origin.to_str().unwrap_or_default();
            allowed_origins.iter().any(|allowed| allowed == origin_str)
        })
    };
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allow_origin);

    base_app.with_state(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
            .layer(cors),
    )
}
