//! Stock movement "verify request" wizard.
//!
//! - `state`: page list and the pure sequencer
//! - `title`: title segments, status badge, breadcrumbs
//! - `pages`: field maps and validation of each step
//! - `step`: page controller driver of one step
//! - `view`: wizard driver and header

pub mod pages;
pub mod state;
pub mod step;
pub mod title;
pub mod view;

pub use view::StockMovementVerifyRequest;
