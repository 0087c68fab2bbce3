pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod types;

pub use error::{ProbeError, PulseError};
pub use service::prober::ConnectivityProber;
pub use types::ConnectivityVerdict;
