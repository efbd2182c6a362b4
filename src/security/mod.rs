//! Security primitives.
//!
//! - **password**: deterministic SHA-512 password digests

pub mod password;
