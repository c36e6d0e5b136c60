// Validator registry - membership governed by majority vote
// Every change to the set goes through an add or remove proposal; the
// proposal commits the moment a strict majority of the current validators
// has voted for it, and its tally is cleared in the same step. The quorum
// is always recomputed from the live validator count at vote time, never
// snapshotted at proposal creation.

use crate::gateway::ballot::{majority, Ballot, VoteOutcome};
use crate::identity::Identity;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

/// Minimum number of validators the registry must retain at all times
pub const MIN_VALIDATORS: usize = 3;

/// Errors that can occur during validator governance
#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Not a validator: identity is not in the validator set")]
    NotValidator,

    #[error("Zero address: the zero identity cannot be a validator")]
    ZeroAddress,

    #[error("Validator already added: candidate is already in the validator set")]
    ValidatorAlreadyAdded,

    #[error("Already voted: caller has already voted for this validator proposal")]
    AlreadyVotedForValidator,

    #[error("Not enough validators: the set cannot shrink below the minimum")]
    NotEnoughValidators,

    #[error("Duplicate validator in initial set: {0}")]
    DuplicateValidator(Identity),
}

/// The validator set and its governance ballots
///
/// All mutation goes through `&mut self`, so a registry shared across
/// threads needs a mutex around the whole value; there is no internal
/// locking.
#[derive(Clone, Debug)]
pub struct ValidatorRegistry {
    /// Current membership
    validators: HashSet<Identity>,
    /// Enumeration order; removal is swap-remove, so only membership is
    /// stable across removals, not position
    roster: Vec<Identity>,
    add_ballot: Ballot<Identity>,
    remove_ballot: Ballot<Identity>,
}

impl ValidatorRegistry {
    /// Create a registry from an initial validator set
    ///
    /// Requires at least `MIN_VALIDATORS` distinct, non-zero identities.
    pub fn new(initial: impl IntoIterator<Item = Identity>) -> Result<Self, ValidatorError> {
        let mut validators = HashSet::new();
        let mut roster = Vec::new();
        for id in initial {
            if id.is_zero() {
                return Err(ValidatorError::ZeroAddress);
            }
            if !validators.insert(id) {
                return Err(ValidatorError::DuplicateValidator(id));
            }
            roster.push(id);
        }
        if roster.len() < MIN_VALIDATORS {
            return Err(ValidatorError::NotEnoughValidators);
        }
        Ok(Self {
            validators,
            roster,
            add_ballot: Ballot::new(),
            remove_ballot: Ballot::new(),
        })
    }

    /// Vote to add a validator
    ///
    /// Records one vote from `caller` for `candidate`. Once a strict
    /// majority of the current validators has voted, the candidate joins
    /// the set and the add tally for it is cleared atomically.
    pub fn add_validator(
        &mut self,
        caller: Identity,
        candidate: Identity,
    ) -> Result<VoteOutcome, ValidatorError> {
        if !self.is_validator(&caller) {
            return Err(ValidatorError::NotValidator);
        }
        if candidate.is_zero() {
            return Err(ValidatorError::ZeroAddress);
        }
        if self.is_validator(&candidate) {
            return Err(ValidatorError::ValidatorAlreadyAdded);
        }

        let votes = self
            .add_ballot
            .record(candidate, caller)
            .map_err(|_| ValidatorError::AlreadyVotedForValidator)?;

        if votes >= self.quorum() {
            self.validators.insert(candidate);
            self.roster.push(candidate);
            self.add_ballot.clear(&candidate);
            info!(validator = %candidate, total = self.roster.len(), "validator added");
            return Ok(VoteOutcome::Committed);
        }

        debug!(candidate = %candidate, votes, "add-validator vote recorded");
        Ok(VoteOutcome::Pending { votes })
    }

    /// Vote to remove a validator
    ///
    /// Rejected outright with `NotEnoughValidators` whenever a committed
    /// removal would shrink the set below `MIN_VALIDATORS`; the floor check
    /// runs before the target is even looked at, so no vote is recorded.
    pub fn remove_validator(
        &mut self,
        caller: Identity,
        target: Identity,
    ) -> Result<VoteOutcome, ValidatorError> {
        if !self.is_validator(&caller) {
            return Err(ValidatorError::NotValidator);
        }
        if self.roster.len() - 1 < MIN_VALIDATORS {
            return Err(ValidatorError::NotEnoughValidators);
        }
        if !self.is_validator(&target) {
            return Err(ValidatorError::NotValidator);
        }

        let votes = self
            .remove_ballot
            .record(target, caller)
            .map_err(|_| ValidatorError::AlreadyVotedForValidator)?;

        if votes >= self.quorum() {
            self.validators.remove(&target);
            if let Some(pos) = self.roster.iter().position(|v| v == &target) {
                self.roster.swap_remove(pos);
            }
            self.remove_ballot.clear(&target);
            info!(validator = %target, total = self.roster.len(), "validator removed");
            return Ok(VoteOutcome::Committed);
        }

        debug!(target = %target, votes, "remove-validator vote recorded");
        Ok(VoteOutcome::Pending { votes })
    }

    /// Number of validators currently in the set
    pub fn number_of_validators(&self) -> usize {
        self.roster.len()
    }

    /// Whether an identity is currently a validator
    pub fn is_validator(&self, id: &Identity) -> bool {
        self.validators.contains(id)
    }

    /// The current validators in enumeration order
    pub fn validators(&self) -> &[Identity] {
        &self.roster
    }

    /// The strict-majority threshold for the current validator count
    pub fn quorum(&self) -> usize {
        majority(self.validators.len())
    }

    /// Votes currently recorded to add a candidate
    pub fn add_votes(&self, candidate: &Identity) -> usize {
        self.add_ballot.votes(candidate)
    }

    /// Votes currently recorded to remove a target
    pub fn remove_votes(&self, target: &Identity) -> usize {
        self.remove_ballot.votes(target)
    }

    /// Whether a voter has voted to add a candidate
    pub fn has_voted_add(&self, candidate: &Identity, voter: &Identity) -> bool {
        self.add_ballot.has_voted(candidate, voter)
    }

    /// Whether a voter has voted to remove a target
    pub fn has_voted_remove(&self, target: &Identity, voter: &Identity) -> bool {
        self.remove_ballot.has_voted(target, voter)
    }
}
