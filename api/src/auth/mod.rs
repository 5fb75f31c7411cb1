//! Admin authentication

pub mod api_key;

pub use api_key::{auth_middleware, hash_api_key};
