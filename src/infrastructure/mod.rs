//! Infrastructure layer - configuration, session store, and the HTTP boundary

pub mod config;
pub mod http;
pub mod session;
pub mod state;
