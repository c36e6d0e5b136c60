// Ballot - the shared voting primitive
// Tracks per-proposal voter sets. The vote count for a key is the size of
// its voter set, so count and membership can never disagree. A tally is
// created lazily on the first vote and dropped outright when the proposal
// commits.

use crate::identity::Identity;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use thiserror::Error;

/// Errors that can occur when recording a vote
#[derive(Error, Debug)]
pub enum BallotError {
    #[error("Duplicate vote: voter has already voted for this proposal")]
    AlreadyVoted,
}

/// Outcome of a mutating governance call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// Vote recorded; quorum not yet reached
    Pending { votes: usize },
    /// This vote reached quorum; the state transition was applied and the
    /// tally cleared in the same step
    Committed,
}

/// Strict majority of `eligible` voters
pub fn majority(eligible: usize) -> usize {
    eligible / 2 + 1
}

/// Per-proposal vote bookkeeping, keyed by proposal subject
#[derive(Clone, Debug)]
pub struct Ballot<K> {
    voters: HashMap<K, HashSet<Identity>>,
}

impl<K> Default for Ballot<K> {
    fn default() -> Self {
        Self {
            voters: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Ballot<K> {
    /// Create an empty ballot
    pub fn new() -> Self {
        Self {
            voters: HashMap::new(),
        }
    }

    /// Record a vote for a key, returning the new vote count
    ///
    /// Fails without any state change if the voter already voted for this
    /// key; callers map the error to their entity-specific variant.
    pub fn record(&mut self, key: K, voter: Identity) -> Result<usize, BallotError> {
        let voters = self.voters.entry(key).or_default();
        if !voters.insert(voter) {
            return Err(BallotError::AlreadyVoted);
        }
        Ok(voters.len())
    }

    /// Drop the tally for a key
    ///
    /// Afterwards the count reads zero and every voter reads as not voted.
    pub fn clear(&mut self, key: &K) {
        self.voters.remove(key);
    }

    /// Current vote count for a key (zero if no tally exists)
    pub fn votes(&self, key: &K) -> usize {
        self.voters.get(key).map_or(0, |v| v.len())
    }

    /// Whether a voter has voted for a key
    pub fn has_voted(&self, key: &K, voter: &Identity) -> bool {
        self.voters.get(key).map_or(false, |v| v.contains(voter))
    }
}
