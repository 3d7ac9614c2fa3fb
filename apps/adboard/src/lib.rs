//! adboard - a classified-ads service.
//!
//! One process serves two transports over one shared in-memory store:
//! a REST gateway (axum) and a gRPC server (tonic). See [`server::run`].

pub mod config;
pub mod grpc;
pub mod openapi;
pub mod server;
