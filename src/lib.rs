//! # Space Rangers
//!
//! A mission board: a flat-file JSON mission store, an HTTP API over it and a
//! command-line client.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! space-rangers = { version = "0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use space_rangers::auth::UserDirectory;
//! use space_rangers::server::{AppState, create_router};
//! use space_rangers::store::{JsonFileStorage, MissionStore};
//!
//! let store = MissionStore::open(JsonFileStorage::new("./data/db.json")).unwrap();
//!
//! let state = Arc::new(AppState::new(Arc::new(store), UserDirectory::default()));
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes the CLI client. Disable with `default-features = false`.

pub mod auth;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
