//! # Axum Helpers
//!
//! A collection of utilities and helpers shared by the HTTP surface:
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`health`]**: Liveness endpoint
//! - **[`server`]**: Router assembly and server startup
//! - **[`shutdown`]**: Graceful shutdown signal handling

pub mod errors;
pub mod health;
pub mod server;
pub mod shutdown;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export health types
pub use health::{health_router, HealthResponse};

// Re-export server helpers
pub use server::{create_app, create_router};

// Re-export shutdown helpers
pub use shutdown::shutdown_signal;
