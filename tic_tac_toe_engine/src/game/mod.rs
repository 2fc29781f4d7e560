pub mod engine;
pub mod error;
pub mod message;
pub mod models;
