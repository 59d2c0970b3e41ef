use axum::{
    Router,
    response::Html,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{auth, notes};
use crate::config::Config;
use crate::store::notes::NoteStore;
use crate::store::users::UserStore;

pub struct AppState {
    pub users: UserStore,
    pub notes: NoteStore,
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/api/notes/{id}",
            put(notes::update_note).delete(notes::delete_note),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: Config) {
    let state = Arc::new(AppState {
        users: UserStore::new(),
        notes: NoteStore::new(config.notes_path),
    });

    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!("Server running at http://{addr}");

    axum::serve(listener, app).await.expect("Server failed");
}
