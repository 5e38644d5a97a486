pub mod aggregate;

pub use aggregate::{
    OutboundReturn, PicklistItem, ShipmentTypeField, StockTransferItem, STATUS_COMPLETED,
};
