//! Send Outbound Return page
//!
//! - model.rs: API functions (fetch, save, send) and record → form values
//! - fields.rs: picklist table declaration
//! - view_model.rs: page controller driver
//! - view.rs: Leptos component

mod fields;
mod model;
mod view;
mod view_model;

pub use model::into_form_values;
pub use view::SendOutboundReturn;
pub use view_model::SendOutboundReturnViewModel;
