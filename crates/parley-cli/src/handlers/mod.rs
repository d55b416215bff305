mod context;

pub mod chat;
pub mod config;
pub mod cost;
pub mod languages;
pub mod models;

pub use context::HandlerContext;
