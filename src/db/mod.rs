pub mod error;
pub mod id;
pub mod models;
pub mod queries;
pub mod seed;
pub mod store;
