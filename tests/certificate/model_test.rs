// Certificate Model Tests
// Tests for the certificate record and its content-hash identity

use certgate::certificate::{Certificate, CertificateHash, Institution, Person};

fn sample_certificate() -> Certificate {
    Certificate::new(
        "12345",
        Person::new("67890", "John", "H.", "Doe"),
        Institution::new("Example University", "EU"),
    )
}

// ============================================================================
// FIELD ACCESS
// ============================================================================

#[test]
fn test_certificate_fields() {
    let cert = sample_certificate();

    assert_eq!(cert.certificate_id(), "12345");
    assert_eq!(cert.person().id(), "67890");
    assert_eq!(cert.person().first_name(), "John");
    assert_eq!(cert.person().middle_name(), "H.");
    assert_eq!(cert.person().last_name(), "Doe");
    assert_eq!(cert.institution().name(), "Example University");
    assert_eq!(cert.institution().country(), "EU");
}

#[test]
fn test_certificate_equality() {
    assert_eq!(sample_certificate(), sample_certificate());

    let other = Certificate::new(
        "99999",
        Person::new("67890", "John", "H.", "Doe"),
        Institution::new("Example University", "EU"),
    );
    assert_ne!(sample_certificate(), other);
}

// ============================================================================
// CERTIFICATE HASH
// ============================================================================

#[test]
fn test_hash_bytes_roundtrip() {
    let hash = CertificateHash::from_bytes([9u8; 32]);

    assert_eq!(hash.as_bytes(), &[9u8; 32]);
    assert_eq!(hash.to_bytes(), [9u8; 32]);
}

#[test]
fn test_hash_display_is_truncated() {
    let hash = CertificateHash::from_bytes([0xabu8; 32]);

    assert_eq!(hash.to_string(), "cert:abababababababab");
}

#[test]
fn test_hash_to_hex_is_full() {
    let hash = CertificateHash::from_bytes([0xabu8; 32]);

    assert_eq!(hash.to_hex(), format!("0x{}", "ab".repeat(32)));
}

#[test]
fn test_certificate_hash_matches_codec() {
    let cert = sample_certificate();

    assert_eq!(cert.hash(), certgate::certificate::CertificateCodec::hash(&cert));
}
