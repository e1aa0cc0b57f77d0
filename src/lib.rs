pub mod client;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod handlers;
pub mod render;
pub mod state;
pub mod store;
pub mod types;

pub use crate::client::GenerationClient;
pub use crate::config::Config;
pub use crate::controller::Controller;
pub use crate::debounce::Debouncer;
pub use crate::error::{AppError, Result};
pub use crate::state::{AppState, Session};
pub use crate::store::{FileStore, LocalStore, MemoryStore};
pub use crate::types::*;

pub use actix_web;
pub use log;
pub use reqwest;
