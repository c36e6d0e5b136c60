// certgate - validator-governed certificate registry
// Two registries share one majority-vote primitive: the validator set
// governs its own membership, and the certificate ledger is governed
// by the current validators.

pub mod certificate;
pub mod gateway;
pub mod identity;
