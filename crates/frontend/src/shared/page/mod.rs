pub mod confirm;
pub mod controller;

pub use confirm::ConfirmDialog;
pub use controller::{
    ConfirmChoice, DiscardTarget, ExitTarget, PageEvent, PageIntent, PagePhase, PageRules,
    PageState, SubmitAction,
};
