use std::sync::Arc;

use crate::auth::token::TokenService;
use crate::db::models::{collections, Blog, Contact, Project, Skill};
use crate::db::repository::{MongoRepository, Repository};

/// Shared application state, built once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn Repository<Project>>,
    pub skills: Arc<dyn Repository<Skill>>,
    pub backend_skills: Arc<dyn Repository<Skill>>,
    pub contacts: Arc<dyn Repository<Contact>>,
    pub blogs: Arc<dyn Repository<Blog>>,
    pub tokens: Arc<TokenService>,
    /// Port the server listens on, reported by the status route.
    pub port: u16,
}

impl AppState {
    /// Wire every collection of `db` to its repository.
    pub fn from_database(db: &mongodb::Database, tokens: TokenService, port: u16) -> Self {
        Self {
            projects: Arc::new(MongoRepository::new(db, collections::PROJECTS)),
            skills: Arc::new(MongoRepository::new(db, collections::SKILLS)),
            backend_skills: Arc::new(MongoRepository::new(db, collections::BACKEND_SKILLS)),
            contacts: Arc::new(MongoRepository::new(db, collections::CONTACTS)),
            blogs: Arc::new(MongoRepository::new(db, collections::BLOGS)),
            tokens: Arc::new(tokens),
            port,
        }
    }
}

/// State backed by in-memory repositories and the secret `test-secret`.
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::db::memory::InMemoryRepository;

    AppState {
        projects: Arc::new(InMemoryRepository::new()),
        skills: Arc::new(InMemoryRepository::new()),
        backend_skills: Arc::new(InMemoryRepository::new()),
        contacts: Arc::new(InMemoryRepository::new()),
        blogs: Arc::new(InMemoryRepository::new()),
        tokens: Arc::new(TokenService::new("test-secret")),
        port: 5000,
    }
}
