pub mod models;
pub mod notes;
pub mod users;
