//! Static reference data: registered vaccine products and breed lists.

mod breeds;
mod vaccines;

pub use breeds::*;
pub use vaccines::*;
