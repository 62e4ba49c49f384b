//! Command implementations

mod diff;
mod validate;

pub use diff::diff;
pub use validate::validate;
