// Gateway module - majority-vote governance
// Arbitrates validator-set and certificate-ledger changes through a
// shared voting primitive

mod ballot;
mod validators;
mod certificates;

pub use ballot::*;
pub use validators::*;
pub use certificates::*;
