pub mod aggregate;

pub use aggregate::{ProductRef, StockMovement, StockMovementLineItem, StockMovementStatus};
