//! Wizard sequencer: page list, current page and accumulated values.
//!
//! Pages are numbered from 1. All transitions are pure; the fetch of the
//! backing movement is returned as a [`WizardIntent`].

use crate::domain::a001_stock_movement::movement_values;
use crate::shared::form::path::merge_values;
use contracts::domain::a001_stock_movement::{StockMovement, StockMovementStatus};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPage {
    Edit,
    Pick,
    Pack,
    Send,
}

impl WizardPage {
    pub fn label_key(&self) -> &'static str {
        match self {
            WizardPage::Edit => "react.stockMovement.edit.label",
            WizardPage::Pick => "react.stockMovement.pick.label",
            WizardPage::Pack => "react.stockMovement.pack.label",
            WizardPage::Send => "react.stockMovement.send.label",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            WizardPage::Edit => "Edit",
            WizardPage::Pick => "Pick",
            WizardPage::Pack => "Pack",
            WizardPage::Send => "Send",
        }
    }
}

const WITH_PACKING: [WizardPage; 4] = [
    WizardPage::Edit,
    WizardPage::Pick,
    WizardPage::Pack,
    WizardPage::Send,
];
const WITHOUT_PACKING: [WizardPage; 3] = [WizardPage::Edit, WizardPage::Pick, WizardPage::Send];

pub fn page_list(has_packing_support: bool) -> &'static [WizardPage] {
    if has_packing_support {
        &WITH_PACKING
    } else {
        &WITHOUT_PACKING
    }
}

/// Progress header captions, one `(label key, default label)` per page
pub fn step_labels(has_packing_support: bool) -> Vec<(&'static str, &'static str)> {
    page_list(has_packing_support)
        .iter()
        .map(|page| (page.label_key(), page.default_label()))
        .collect()
}

/// First page to show for a movement in the given status
pub fn start_page(status: &StockMovementStatus, page_count: usize) -> usize {
    match status {
        StockMovementStatus::Requested | StockMovementStatus::Validating => 1,
        StockMovementStatus::Validated | StockMovementStatus::Picking => 2,
        StockMovementStatus::Picked | StockMovementStatus::Packing => 3,
        _ => page_count,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Loading,
    LoadFailed,
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// Fetch the movement again after a failure
    Reload,
    Loaded { token: u64, record: StockMovement },
    LoadFailed { token: u64 },
    Advance { from_page: usize, values: Value },
    Retreat { from_page: usize, values: Value },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardIntent {
    FetchMovement { id: String, token: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub values: Value,
    pub current_page: usize,
    pub has_packing_support: bool,
    pub phase: WizardPhase,
    identifier: Option<String>,
    load_token: u64,
}

/// Start the wizard. With an identifier the movement is fetched and the
/// start page follows its status; without one the wizard opens on page 1
/// with `defaults`.
pub fn initialize(
    identifier: Option<&str>,
    has_packing_support: bool,
    defaults: Value,
) -> (WizardState, Vec<WizardIntent>) {
    let state = WizardState {
        values: defaults,
        current_page: 1,
        has_packing_support,
        phase: WizardPhase::Ready,
        identifier: identifier.filter(|id| !id.is_empty()).map(str::to_string),
        load_token: 0,
    };
    if state.identifier.is_some() {
        state.step(WizardEvent::Reload)
    } else {
        (state, vec![])
    }
}

impl WizardState {
    pub fn pages(&self) -> &'static [WizardPage] {
        page_list(self.has_packing_support)
    }

    pub fn page_count(&self) -> usize {
        self.pages().len()
    }

    pub fn current(&self) -> WizardPage {
        let pages = self.pages();
        pages[self.current_page.clamp(1, pages.len()) - 1]
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page == self.page_count()
    }

    pub fn load_token(&self) -> u64 {
        self.load_token
    }

    pub fn step(mut self, event: WizardEvent) -> (Self, Vec<WizardIntent>) {
        match event {
            WizardEvent::Reload => match self.identifier.clone() {
                Some(id) => {
                    self.load_token += 1;
                    self.phase = WizardPhase::Loading;
                    let token = self.load_token;
                    (self, vec![WizardIntent::FetchMovement { id, token }])
                }
                None => (self, vec![]),
            },
            WizardEvent::Loaded { token, .. } | WizardEvent::LoadFailed { token }
                if token != self.load_token =>
            {
                log::debug!("discarding stale stock movement response (token {token})");
                (self, vec![])
            }
            WizardEvent::Loaded { record, .. } => {
                self.current_page = start_page(&record.status(), self.page_count());
                self.values = movement_values(&record);
                self.phase = WizardPhase::Ready;
                (self, vec![])
            }
            WizardEvent::LoadFailed { .. } => {
                self.phase = WizardPhase::LoadFailed;
                (self, vec![])
            }
            WizardEvent::Advance { from_page, values } => {
                self.values = merge_values(&self.values, &values);
                self.current_page = (from_page + 1).clamp(1, self.page_count());
                (self, vec![])
            }
            WizardEvent::Retreat { from_page, values } => {
                self.values = merge_values(&self.values, &values);
                self.current_page = from_page.saturating_sub(1).clamp(1, self.page_count());
                (self, vec![])
            }
        }
    }
}
