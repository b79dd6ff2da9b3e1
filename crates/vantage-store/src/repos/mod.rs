//! Collection operations on [`StateStore`](crate::StateStore), one module per
//! document family.

pub mod enrichment;
pub mod lists;
pub mod notes;
pub mod searches;

pub use lists::AddOutcome;
