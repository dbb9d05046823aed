//! Fixed response texts.

/// Plain-text body for unmatched routes
pub const NOT_FOUND: &str = "404 - Page Not Found.";

/// Plain-text body for requests whose handler panicked
pub const UNKNOWN_ERROR: &str = "500. An unknown error has occured.";

/// Message for requests rejected by the API key check
pub const UNAUTHORIZED: &str = "Unauthorized";
