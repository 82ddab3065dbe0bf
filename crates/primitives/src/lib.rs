//! Core value types shared by the registry and the widget configuration engine.

/// Page object references carried by descriptors.
pub mod instance;
/// Well-known option keys.
pub mod keys;
/// Builder macro for literal option sets.
mod macros;
/// Type name identifiers.
pub mod name;
/// Ordered option maps and their merge operations.
pub mod option_set;
/// Option value variants.
pub mod value;

pub use instance::InstanceRef;
pub use name::TypeName;
pub use option_set::OptionSet;
pub use value::OptionValue;
