use crate::certificate::CertificateCodec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content hash identifying a certificate (SHA-256 over the canonical encoding)
///
/// The ledger keys everything by this hash and never stores the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CertificateHash([u8; 32]);

impl CertificateHash {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to bytes (for serialization)
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Full hex rendering, `0x`-prefixed
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for CertificateHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cert:{}", hex::encode(&self.0[..8]))
    }
}

/// The person a certificate attests to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: String,
    first_name: String,
    middle_name: String,
    last_name: String,
}

impl Person {
    /// Create a new person record
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            middle_name: middle_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// The institution issuing a certificate
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    name: String,
    country: String,
}

impl Institution {
    /// Create a new institution record
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

/// A certificate record
///
/// Field declaration order is the canonical field order for hashing;
/// see `CertificateCodec`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    certificate_id: String,
    person: Person,
    institution: Institution,
}

impl Certificate {
    /// Create a new certificate
    pub fn new(certificate_id: impl Into<String>, person: Person, institution: Institution) -> Self {
        Self {
            certificate_id: certificate_id.into(),
            person,
            institution,
        }
    }

    pub fn certificate_id(&self) -> &str {
        &self.certificate_id
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn institution(&self) -> &Institution {
        &self.institution
    }

    /// The canonical content hash of this certificate
    pub fn hash(&self) -> CertificateHash {
        CertificateCodec::hash(self)
    }
}
