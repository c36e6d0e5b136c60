// Identity Tests
// Tests for the 20-byte validator principal type

use certgate::identity::{Identity, IdentityError};

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_from_bytes_roundtrip() {
    let bytes = [7u8; 20];
    let id = Identity::from_bytes(bytes);

    assert_eq!(id.as_bytes(), &bytes);
}

#[test]
fn test_zero_is_sentinel() {
    assert!(Identity::ZERO.is_zero());
    assert_eq!(Identity::ZERO, Identity::from_bytes([0u8; 20]));
}

#[test]
fn test_random_is_not_zero() {
    // Statistically certain; a zero draw would be a broken RNG
    assert!(!Identity::random().is_zero());
}

#[test]
fn test_random_unique() {
    let a = Identity::random();
    let b = Identity::random();

    assert_ne!(a, b);
}

// ============================================================================
// DISPLAY AND PARSING
// ============================================================================

#[test]
fn test_display_is_prefixed_hex() {
    let id = Identity::from_bytes([0xffu8; 20]);

    assert_eq!(id.to_string(), format!("0x{}", "ff".repeat(20)));
}

#[test]
fn test_parse_roundtrip() {
    let id = Identity::random();
    let parsed: Identity = id.to_string().parse().unwrap();

    assert_eq!(id, parsed);
}

#[test]
fn test_parse_accepts_unprefixed() {
    let parsed: Identity = "00".repeat(20).parse().unwrap();

    assert_eq!(parsed, Identity::ZERO);
}

#[test]
fn test_parse_rejects_short_input() {
    let result: Result<Identity, _> = "0x1234".parse();

    assert!(matches!(result, Err(IdentityError::InvalidLength(2))));
}

#[test]
fn test_parse_rejects_long_input() {
    let result: Result<Identity, _> = "ab".repeat(21).parse::<Identity>();

    assert!(matches!(result, Err(IdentityError::InvalidLength(21))));
}

#[test]
fn test_parse_rejects_non_hex() {
    let result: Result<Identity, _> = "gg".repeat(20).parse::<Identity>();

    assert!(matches!(result, Err(IdentityError::InvalidHex(_))));
}
