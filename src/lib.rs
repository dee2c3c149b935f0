//! # AgriGenius
//!
//! A farming-assistant backend, usable both as a standalone binary and as a
//! library. It serves weather, soil, crop, market, disease-detection, and
//! government-scheme data over a REST API, backed by a seeded in-memory
//! store.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! agrigenius = { version = "0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use agrigenius::server::{AppState, create_router};
//! use agrigenius::store::{MemStore, Store, seed_demo_data};
//!
//! let store: Arc<dyn Store> = Arc::new(MemStore::new());
//! seed_demo_data(store.as_ref()).unwrap();
//!
//! let state = Arc::new(AppState { store });
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes the server binary's command-line interface.
//!   Disable with `default-features = false`.

pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
