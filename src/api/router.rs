use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{backend_skills, blogs, contacts, projects, skills, status, token};
use crate::app::AppState;
use crate::auth::middleware::require_bearer;

/// Build the application router.
///
/// Reads are public except the contact inbox. Writes require a bearer token,
/// except the contact form and token issuance.
pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(status::root_handler))
        .route("/projects", get(projects::list_projects_handler))
        .route("/projects/{id}", get(projects::get_project_handler))
        .route("/skills", get(skills::list_skills_handler))
        .route(
            "/backendskills",
            get(backend_skills::list_backend_skills_handler),
        )
        .route("/contacts", post(contacts::create_contact_handler))
        .route("/blogs", get(blogs::list_blogs_handler))
        .route("/blogs/{id}", get(blogs::get_blog_handler))
        .route("/jwt", post(token::issue_token_handler));

    let protected = Router::new()
        .route("/projects", post(projects::create_project_handler))
        .route(
            "/projects/{id}",
            put(projects::update_project_handler)
                .delete(projects::delete_project_handler),
        )
        .route("/skills", post(skills::create_skill_handler))
        .route("/skills/{id}", delete(skills::delete_skill_handler))
        .route(
            "/backendskills",
            post(backend_skills::create_backend_skills_handler),
        )
        .route("/contacts", get(contacts::list_contacts_handler))
        .route("/blogs", post(blogs::create_blog_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    public
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
