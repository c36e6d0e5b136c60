// Certificate module - the attested record
// Model, validating builder, and canonical encoding/hashing

mod model;
mod builder;
mod codec;

pub use model::*;
pub use builder::*;
pub use codec::*;
