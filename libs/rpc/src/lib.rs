//! Committed protobuf/tonic code for the adboard gRPC surface.
//!
//! The sources live in `protos/`; the generated modules are checked in under
//! `src/gen/` so builds need neither `protoc` nor a network connection.

mod gen;

pub use gen::{ads, users};
