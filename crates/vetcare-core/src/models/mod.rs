//! Domain value types for the calculators.
//!
//! Everything here is an immutable input or output of a pure computation;
//! none of these types has a lifecycle beyond the call that produced it.

mod morphometry;
mod nutrition;
mod species;
mod vaccination;

pub use morphometry::*;
pub use nutrition::*;
pub use species::*;
pub use vaccination::*;
