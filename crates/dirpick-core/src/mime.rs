//! Mimetype inference from file names.

/// Mimetype sentinel used for every directory.
pub const DIR_MIMETYPE: &str = "DIR";

/// Fallback for names without a recognized extension.
pub const UNKNOWN_MIMETYPE: &str = "application/octet-stream";

/// Guess a mimetype from a file name.
pub fn infer_mimetype(name: &str) -> &'static str {
    mime_guess::from_path(name)
        .first_raw()
        .unwrap_or(UNKNOWN_MIMETYPE)
}
