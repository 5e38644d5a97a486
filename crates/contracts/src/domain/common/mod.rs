//! Common wire types for all aggregates

pub mod localized;
pub mod nullable;
pub mod reference;

// Re-exports
pub use localized::{localized_label, FRENCH_DELIMITER};
pub use nullable::null_as_default;
pub use reference::{LocationRef, LocationTypeRef, NamedRef};
