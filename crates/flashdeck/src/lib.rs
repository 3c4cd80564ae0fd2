//! Shared library for flashdeck, a browser client for creating flashcard sets.
//!
//! Everything here is independent of the browser: the API client seam, the
//! durable session store, status messages, the view interface, and the
//! [`controller::SessionFormController`] tying them together. The Yew
//! frontend supplies the browser-backed implementations.

pub mod api;
pub mod config;
pub mod controller;
pub mod data;
pub mod errors;
pub mod log;
pub mod macros;
pub mod session;
pub mod status;
pub mod view;

pub use tracing;
pub use tracing::{debug, error, info, trace, warn};
