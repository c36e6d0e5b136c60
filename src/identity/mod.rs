// Identity module - validator principals
// Opaque 20-byte account-style identifiers

mod address;

pub use address::*;
