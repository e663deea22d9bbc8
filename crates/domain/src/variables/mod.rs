//! Variable domain types

mod indirection;
mod store;

pub use indirection::Indirection;
pub use store::VariableStore;
