//! gRPC service implementations.
//!
//! Thin wrappers around the domain services: each handler converts the wire
//! request, delegates, and maps domain errors to gRPC status codes.

pub mod ads;
pub mod users;

pub use ads::AdsGrpcService;
pub use users::UsersGrpcService;
