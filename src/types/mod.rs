pub mod lookup;
pub mod responses;
pub mod verdict;

pub use lookup::LookupRequest;
pub use responses::{LookupResponse, PlaceholderResponse, StatusResponse};
pub use verdict::ConnectivityVerdict;
