// Certificate ledger - confirmed certificates governed by validator vote
// Stores only content hashes; payload storage is the caller's concern.
// The ledger holds no reference to the validator registry - every mutating
// call takes it explicitly, and the quorum is whatever the registry reports
// at that moment.

use crate::certificate::{Certificate, CertificateCodec, CertificateHash};
use crate::gateway::ballot::{Ballot, VoteOutcome};
use crate::gateway::validators::ValidatorRegistry;
use crate::identity::Identity;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during certificate governance
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("Not a validator: caller is not an eligible voter")]
    NotValidator,

    #[error("Certificate already added: the certificate is already confirmed")]
    CertificateAlreadyAdded,

    #[error("Not a valid certificate: the certificate is not currently confirmed")]
    NotValidCertificate,

    #[error("Already voted: caller has already voted for this certificate proposal")]
    AlreadyVotedForCertificate,
}

/// The set of confirmed certificates and its governance ballots
#[derive(Clone, Debug, Default)]
pub struct CertificateLedger {
    confirmed: HashSet<CertificateHash>,
    submit_ballot: Ballot<CertificateHash>,
    invalidate_ballot: Ballot<CertificateHash>,
}

impl CertificateLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Vote to confirm a certificate
    ///
    /// Hashes the certificate canonically and delegates to `submit_hash`.
    pub fn submit_certificate(
        &mut self,
        registry: &ValidatorRegistry,
        caller: Identity,
        cert: &Certificate,
    ) -> Result<VoteOutcome, CertificateError> {
        self.submit_hash(registry, caller, CertificateCodec::hash(cert))
    }

    /// Vote to confirm a certificate by its precomputed content hash
    pub fn submit_hash(
        &mut self,
        registry: &ValidatorRegistry,
        caller: Identity,
        hash: CertificateHash,
    ) -> Result<VoteOutcome, CertificateError> {
        if !registry.is_validator(&caller) {
            return Err(CertificateError::NotValidator);
        }
        if self.confirmed.contains(&hash) {
            return Err(CertificateError::CertificateAlreadyAdded);
        }

        let votes = self
            .submit_ballot
            .record(hash, caller)
            .map_err(|_| CertificateError::AlreadyVotedForCertificate)?;

        if votes >= registry.quorum() {
            self.confirmed.insert(hash);
            self.submit_ballot.clear(&hash);
            info!(certificate = %hash, "certificate confirmed");
            return Ok(VoteOutcome::Committed);
        }

        debug!(certificate = %hash, votes, "submit vote recorded");
        Ok(VoteOutcome::Pending { votes })
    }

    /// Vote to invalidate a confirmed certificate
    pub fn invalidate_certificate(
        &mut self,
        registry: &ValidatorRegistry,
        caller: Identity,
        cert: &Certificate,
    ) -> Result<VoteOutcome, CertificateError> {
        self.invalidate_hash(registry, caller, CertificateCodec::hash(cert))
    }

    /// Vote to invalidate a confirmed certificate by its content hash
    pub fn invalidate_hash(
        &mut self,
        registry: &ValidatorRegistry,
        caller: Identity,
        hash: CertificateHash,
    ) -> Result<VoteOutcome, CertificateError> {
        if !registry.is_validator(&caller) {
            return Err(CertificateError::NotValidator);
        }
        if !self.confirmed.contains(&hash) {
            return Err(CertificateError::NotValidCertificate);
        }

        let votes = self
            .invalidate_ballot
            .record(hash, caller)
            .map_err(|_| CertificateError::AlreadyVotedForCertificate)?;

        if votes >= registry.quorum() {
            self.confirmed.remove(&hash);
            self.invalidate_ballot.clear(&hash);
            info!(certificate = %hash, "certificate invalidated");
            return Ok(VoteOutcome::Committed);
        }

        debug!(certificate = %hash, votes, "invalidate vote recorded");
        Ok(VoteOutcome::Pending { votes })
    }

    /// Whether a certificate is currently confirmed
    pub fn is_confirmed(&self, hash: &CertificateHash) -> bool {
        self.confirmed.contains(hash)
    }

    /// Number of confirmed certificates
    pub fn certificate_count(&self) -> usize {
        self.confirmed.len()
    }

    /// Votes currently recorded to confirm a certificate
    pub fn submit_votes(&self, hash: &CertificateHash) -> usize {
        self.submit_ballot.votes(hash)
    }

    /// Votes currently recorded to invalidate a certificate
    pub fn invalidate_votes(&self, hash: &CertificateHash) -> usize {
        self.invalidate_ballot.votes(hash)
    }

    /// Whether a voter has voted to confirm a certificate
    pub fn has_voted_submit(&self, hash: &CertificateHash, voter: &Identity) -> bool {
        self.submit_ballot.has_voted(hash, voter)
    }

    /// Whether a voter has voted to invalidate a certificate
    pub fn has_voted_invalidate(&self, hash: &CertificateHash, voter: &Identity) -> bool {
        self.invalidate_ballot.has_voted(hash, voter)
    }
}
