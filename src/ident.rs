//! Opaque identifier generation for acts and scenes.

use uuid::Uuid;

/// Generates a unique opaque id.
///
/// Ids combine a millisecond timestamp with random bits (UUID v7), so they
/// sort roughly by creation time and never collide within a process lifetime.
/// No coordination with other processes is needed.
pub fn generate() -> String {
    Uuid::now_v7().simple().to_string()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_unique() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_generate_format_is_opaque_hex() {
        let id = generate();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_roughly_time_ordered() {
        // v7 ids created in sequence share a non-decreasing timestamp prefix.
        let a = generate();
        let b = generate();
        assert!(a[..12] <= b[..12]);
    }
}
