//! Attachment limits for complaint uploads. Enforced while the multipart
//! body is being read, before anything touches disk.

pub const MAX_FILES: usize = 5;
pub const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

pub const TOO_MANY_FILES_MESSAGE: &str = "Too many files. Maximum is 5";
pub const FILE_TOO_LARGE_MESSAGE: &str = "File too large. Maximum size is 5MB";
pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Only image files are allowed (jpeg, png, webp, gif)";

/// Maps an allowed image content type to the on-disk extension. `None`
/// means the upload must be rejected.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some(".jpg"),
        "image/png" => Some(".png"),
        "image/webp" => Some(".webp"),
        "image/gif" => Some(".gif"),
        _ => None,
    }
}
