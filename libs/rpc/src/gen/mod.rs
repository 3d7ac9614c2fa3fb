// @generated
// This file wires up generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod ads {
    include!("ads.rs");
    // ads.tonic.rs is auto-included by ads.rs
}

pub mod users {
    include!("users.rs");
    // users.tonic.rs is auto-included by users.rs
}
