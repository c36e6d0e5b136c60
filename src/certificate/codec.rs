// Certificate codec - canonical encoding and content hashing
// The canonical form is the postcard serialization of the certificate in
// field declaration order; the content hash is SHA-256 over a fixed domain
// prefix followed by those bytes. Equal logical certificates always hash
// equal, so the hash is usable as the ledger's primary key.

use crate::certificate::{Certificate, CertificateHash};
use sha2::{Digest, Sha256};
use thiserror::Error;

const HASH_DOMAIN: &[u8] = b"certgate:cert:";

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to decode certificate: {0}")]
    DecodeError(String),

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error("Invalid base64 string: {0}")]
    InvalidBase64(String),
}

/// Codec for serializing, deserializing, and hashing certificates
pub struct CertificateCodec;

impl CertificateCodec {
    /// Encode a certificate to its canonical binary form
    pub fn encode(cert: &Certificate) -> Vec<u8> {
        postcard::to_allocvec(cert).expect("Failed to encode certificate")
    }

    /// Decode a certificate from canonical binary form
    pub fn decode(bytes: &[u8]) -> Result<Certificate, CodecError> {
        postcard::from_bytes(bytes).map_err(|e| CodecError::DecodeError(e.to_string()))
    }

    /// Compute the canonical content hash of a certificate
    pub fn hash(cert: &Certificate) -> CertificateHash {
        let mut hasher = Sha256::new();
        hasher.update(HASH_DOMAIN);
        hasher.update(Self::encode(cert));
        let digest = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        CertificateHash::from_bytes(bytes)
    }

    /// Encode to hex string
    pub fn encode_hex(cert: &Certificate) -> String {
        hex::encode(Self::encode(cert))
    }

    /// Decode from hex string
    pub fn decode_hex(hex_str: &str) -> Result<Certificate, CodecError> {
        let bytes = hex::decode(hex_str).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
        Self::decode(&bytes)
    }

    /// Encode to base64 string (URL-safe, no padding)
    pub fn encode_base64(cert: &Certificate) -> String {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        URL_SAFE_NO_PAD.encode(Self::encode(cert))
    }

    /// Decode from base64 string
    pub fn decode_base64(b64_str: &str) -> Result<Certificate, CodecError> {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        let bytes = URL_SAFE_NO_PAD
            .decode(b64_str)
            .map_err(|e| CodecError::InvalidBase64(e.to_string()))?;
        Self::decode(&bytes)
    }
}
