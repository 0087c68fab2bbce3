//! Datastore access over the PostgREST-style REST layer.
//!
//! Layout:
//! - `models.rs`: row and error payload shapes returned by the REST layer
//! - `postgrest.rs`: the thin client bound to one endpoint/key pair

pub mod models;
pub mod postgrest;

pub use models::{PostgrestErrorBody, Row};
pub use postgrest::PostgrestClient;
