pub mod a001_stock_movement;
pub mod a002_stock_transfer;
pub mod a003_shipment_type;
pub mod common;
