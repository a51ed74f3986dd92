//! Media reference limits and hint checks.
//!
//! The document stores media as opaque string references, so the crate never
//! sees payload bytes. Callers that do hold the bytes can pre-check the
//! MIME type and size hints here before attaching a reference.

/// MIME types accepted for thumbnail and storyboard images.
pub const IMAGE_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Largest accepted image payload, 10 MiB.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Largest accepted video payload, 100 MiB.
pub const MAX_VIDEO_BYTES: u64 = 100 * 1024 * 1024;

/// Most storyboard images a single scene may carry.
pub const STORYBOARD_IMAGE_LIMIT: usize = 5;

/// Checks an image upload hint. Empty result means acceptable.
pub fn validate_image_hint(mime: &str, size_bytes: u64) -> Vec<String> {
    let mut violations = Vec::new();
    if !IMAGE_MIME_TYPES.contains(&mime) {
        violations.push("Please upload a valid image file (JPEG, PNG, GIF, or WebP)".to_string());
    }
    if size_bytes > MAX_IMAGE_BYTES {
        violations.push("File size must be less than 10MB".to_string());
    }
    violations
}

/// Checks a video upload hint. Empty result means acceptable.
pub fn validate_video_hint(mime: &str, size_bytes: u64) -> Vec<String> {
    let mut violations = Vec::new();
    if !mime.starts_with("video/") {
        violations.push("Please select a video file".to_string());
    }
    if size_bytes > MAX_VIDEO_BYTES {
        violations.push("Video file too large. Maximum size is 100MB".to_string());
    }
    violations
}

// =============================================================================
// TESTS
// =============================================================================
