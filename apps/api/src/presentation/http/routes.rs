use super::{
    handlers::{aquariums, health},
    middleware::auth::require_auth,
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn create_router(state: AppState) -> Router {
    let private_routes = Router::new()
        .route("/aquariums", post(aquariums::create_aquarium))
        .route("/aquariums/{id}", delete(aquariums::delete_aquarium))
        .route("/aquariums/like/{id}", put(aquariums::like_aquarium))
        .route("/aquariums/unlike/{id}", put(aquariums::unlike_aquarium))
        .route("/aquariums/comment/{id}", post(aquariums::add_comment))
        .route(
            "/aquariums/comment/{id}/{comment_id}",
            delete(aquariums::delete_comment),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Public reads
        .route("/aquariums", get(aquariums::list_aquariums))
        .route("/aquariums/{id}", get(aquariums::get_aquarium))
        // Writes (protected by x-auth-token)
        .merge(private_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
