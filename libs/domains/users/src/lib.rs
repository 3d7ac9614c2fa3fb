//! Users Domain
//!
//! Accounts that own classified ads. Same layering as the ads domain:
//! service (business logic) over a repository trait (data access) over the
//! models, with REST handlers and proto conversions at the edges.

pub mod conversions;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUser, UpdateUser, User};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
