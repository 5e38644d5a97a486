pub mod api;
pub mod values;

pub use values::movement_values;
