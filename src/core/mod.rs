/// Board and panel entity model with validating construction and mutation
pub mod equipment;
/// Operational state enums and string coercion
pub mod state;
/// Invariant rule functions
pub mod validation;
