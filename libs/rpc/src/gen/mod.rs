// @generated
// This file wires up buf-generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod auth {
    pub mod v1 {
        include!("auth.v1.rs");
        // auth.v1.tonic.rs is auto-included by auth.v1.rs
    }
}

pub mod todo {
    pub mod v1 {
        include!("todo.v1.rs");
        // todo.v1.tonic.rs is auto-included by todo.v1.rs
    }
}
