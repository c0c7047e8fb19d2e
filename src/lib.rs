pub mod app;
pub mod config;
pub mod error;
pub mod auth {
    pub mod middleware;
    pub mod token;
}
pub mod db {
    #[cfg(test)]
    pub mod memory;
    pub mod models;
    pub mod object_id;
    pub mod repository;
}
pub mod api {
    pub mod backend_skills;
    pub mod blogs;
    pub mod contacts;
    pub mod crud;
    pub mod errors;
    pub mod extract;
    pub mod projects;
    pub mod router;
    pub mod skills;
    pub mod status;
    pub mod token;
}
