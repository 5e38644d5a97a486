pub mod aggregate;

pub use aggregate::ShipmentType;
