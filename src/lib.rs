pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod api {
    pub mod articles;
    pub mod errors;
}
pub mod db {
    pub mod models;
    pub mod repository;
}
