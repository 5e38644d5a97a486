//! Wire contracts shared between the warehouse backend and the front-end.
//!
//! Field names follow the backend JSON (camelCase). Every nested object that the
//! backend may omit is optional so a partial record still deserializes.

pub mod dashboards;
pub mod domain;
