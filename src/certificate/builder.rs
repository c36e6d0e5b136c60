use crate::certificate::{Certificate, Institution, Person};
use thiserror::Error;

/// Errors that can occur when building a certificate
#[derive(Error, Debug)]
pub enum CertificateBuildError {
    #[error("Missing certificate id: certificate id is required")]
    MissingCertificateId,

    #[error("Missing person: person record is required")]
    MissingPerson,

    #[error("Missing institution: institution record is required")]
    MissingInstitution,

    #[error("Empty field: {0} cannot be blank")]
    EmptyField(&'static str),
}

/// Builder for creating validated certificates
pub struct CertificateBuilder {
    certificate_id: Option<String>,
    person: Option<Person>,
    institution: Option<Institution>,
}

impl CertificateBuilder {
    /// Create a new CertificateBuilder
    pub fn new() -> Self {
        Self {
            certificate_id: None,
            person: None,
            institution: None,
        }
    }

    /// Set the certificate id (required)
    pub fn certificate_id(mut self, id: impl Into<String>) -> Self {
        self.certificate_id = Some(id.into());
        self
    }

    /// Set the person (required)
    pub fn person(mut self, person: Person) -> Self {
        self.person = Some(person);
        self
    }

    /// Set the institution (required)
    pub fn institution(mut self, institution: Institution) -> Self {
        self.institution = Some(institution);
        self
    }

    /// Build the certificate
    ///
    /// The middle name is the only field allowed to be blank.
    pub fn build(self) -> Result<Certificate, CertificateBuildError> {
        let certificate_id = self
            .certificate_id
            .ok_or(CertificateBuildError::MissingCertificateId)?;
        let person = self.person.ok_or(CertificateBuildError::MissingPerson)?;
        let institution = self
            .institution
            .ok_or(CertificateBuildError::MissingInstitution)?;

        if certificate_id.trim().is_empty() {
            return Err(CertificateBuildError::EmptyField("certificate id"));
        }
        if person.id().trim().is_empty() {
            return Err(CertificateBuildError::EmptyField("person id"));
        }
        if person.first_name().trim().is_empty() {
            return Err(CertificateBuildError::EmptyField("first name"));
        }
        if person.last_name().trim().is_empty() {
            return Err(CertificateBuildError::EmptyField("last name"));
        }
        if institution.name().trim().is_empty() {
            return Err(CertificateBuildError::EmptyField("institution name"));
        }
        if institution.country().trim().is_empty() {
            return Err(CertificateBuildError::EmptyField("institution country"));
        }

        Ok(Certificate::new(certificate_id, person, institution))
    }
}

impl Default for CertificateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
