//! Two-choice confirmation shown before discarding invalid values.

use super::controller::{ConfirmChoice, DiscardTarget};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmButton {
    pub label_key: &'static str,
    pub default_label: &'static str,
    pub choice: ConfirmChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmCopy {
    pub title: &'static str,
    pub message: &'static str,
    /// In display order
    pub buttons: [ConfirmButton; 2],
}

pub fn confirm_copy(target: DiscardTarget) -> ConfirmCopy {
    match target {
        DiscardTarget::Previous => ConfirmCopy {
            title: "Validation error",
            message: "Cannot save due to validation error on page",
            buttons: [
                ConfirmButton {
                    label_key: "react.stockMovement.confirmPreviousPage.correctError.label",
                    default_label: "Correct error",
                    choice: ConfirmChoice::FixIt,
                },
                ConfirmButton {
                    label_key: "react.stockMovement.confirmPreviousPage.continue.label",
                    default_label: "Continue (lose unsaved work)",
                    choice: ConfirmChoice::Discard,
                },
            ],
        },
        DiscardTarget::Show => ConfirmCopy {
            title: "Confirm save",
            message: "Validation errors occurred. Are you sure you want to exit and lose unsaved data?",
            buttons: [
                ConfirmButton {
                    label_key: "react.default.yes.label",
                    default_label: "Yes",
                    choice: ConfirmChoice::Discard,
                },
                ConfirmButton {
                    label_key: "react.default.no.label",
                    default_label: "No",
                    choice: ConfirmChoice::FixIt,
                },
            ],
        },
    }
}

/// Clicking the overlay keeps the user on the page
#[component]
pub fn ConfirmDialog(target: DiscardTarget, on_choice: Callback<ConfirmChoice>) -> impl IntoView {
    let copy = confirm_copy(target);
    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    let buttons = copy
        .buttons
        .into_iter()
        .map(|button| {
            let appearance = match button.choice {
                ConfirmChoice::Discard => ButtonAppearance::Primary,
                ConfirmChoice::FixIt => ButtonAppearance::Secondary,
            };
            view! {
                <Button
                    appearance=appearance
                    on_click=move |_| on_choice.run(button.choice)
                >
                    <span data-label-key=button.label_key>{button.default_label}</span>
                </Button>
            }
        })
        .collect_view();

    view! {
        <div class="modal-overlay" on:click=move |_| on_choice.run(ConfirmChoice::FixIt)>
            <div class="modal confirm-dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{copy.title}</h2>
                </div>
                <div class="modal-body">{copy.message}</div>
                <div class="modal-footer">{buttons}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_dialog_offers_both_choices() {
        for target in [DiscardTarget::Previous, DiscardTarget::Show] {
            let copy = confirm_copy(target);
            let choices: Vec<_> = copy.buttons.iter().map(|b| b.choice).collect();
            assert!(choices.contains(&ConfirmChoice::FixIt));
            assert!(choices.contains(&ConfirmChoice::Discard));
        }
    }
}
