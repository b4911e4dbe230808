/// Bearer-token identity extraction
pub mod auth;
/// Domain error to HTTP response mapping
pub mod error_handling;
/// Extractors that reject with the uniform error body
pub mod extract;
