//! Page controller: one form page as a pure state machine.
//!
//! ```text
//! Loading → Ready → Submitting → { Ready (saved), Advanced, Retreated, Exited }
//!                                   failed advance or retreat ──→ Ready
//!             └──→ ConfirmPending(Previous | Show) → { Ready, Retreated, Exited }
//! ```
//!
//! [`PageState::step`] never performs effects; it returns [`PageIntent`]s that
//! the Leptos driver executes, feeding the outcome back as another event.

use crate::shared::form::FieldErrors;
use serde_json::Value;

/// Page-specific rules plugged into the controller
pub trait PageRules {
    fn validate(&self, values: &Value) -> FieldErrors;

    /// Shape the values take on the wire
    fn normalize_for_save(&self, values: &Value) -> Value {
        values.clone()
    }

    /// Record is in a terminal state: nothing can be edited or submitted
    fn is_terminal(&self, _values: &Value) -> bool {
        false
    }
}

/// What happens once a persist succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Save,
    Advance,
    Back,
    Exit,
}

/// Where a confirmed discard leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardTarget {
    /// Previous wizard page
    Previous,
    /// External "show" view of the record
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    FixIt,
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTarget {
    /// Record "show" view after saving or discarding
    RecordShow,
    /// Read-only exit of a terminal record
    TerminalShow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    Loading,
    LoadFailed,
    Ready,
    Submitting(SubmitAction),
    ConfirmPending(DiscardTarget),
    Advanced,
    Retreated,
    Exited,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Load,
    Loaded { token: u64, values: Value },
    LoadFailed { token: u64 },
    Save(Value),
    SubmitAndAdvance(Value),
    GoBack(Value),
    Exit(Value),
    Confirm(ConfirmChoice),
    Persisted(Value),
    PersistFailed,
    /// The post-persist advance step (e.g. finalizing a shipment) failed
    AdvanceFailed,
    /// Navigation to the previous page did not happen
    RetreatFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageIntent {
    Fetch { token: u64 },
    Persist { values: Value, then: SubmitAction },
    /// Replace what the form shows
    ShowValues(Value),
    Advance(Value),
    Retreat(Value),
    ExitTo(ExitTarget),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub phase: PagePhase,
    /// Last loaded or persisted record
    pub values: Value,
    /// Values being submitted or awaiting a discard decision
    pending: Option<Value>,
    load_token: u64,
}

impl PageState {
    /// Page that fetches its own record
    pub fn loading() -> Self {
        Self {
            phase: PagePhase::Loading,
            values: Value::Null,
            pending: None,
            load_token: 0,
        }
    }

    /// Page handed its values by the caller (a wizard step)
    pub fn ready(values: Value) -> Self {
        Self {
            phase: PagePhase::Ready,
            values,
            pending: None,
            load_token: 0,
        }
    }

    pub fn load_token(&self) -> u64 {
        self.load_token
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, PagePhase::Loading | PagePhase::Submitting(_))
    }

    /// Submit-type actions are enabled
    pub fn can_submit(&self, rules: &impl PageRules, values: &Value) -> bool {
        self.phase == PagePhase::Ready
            && !rules.is_terminal(values)
            && rules.validate(values).is_empty()
    }

    pub fn step(mut self, event: PageEvent, rules: &impl PageRules) -> (Self, Vec<PageIntent>) {
        use PageEvent as E;
        use PagePhase as P;

        match (self.phase, event) {
            (_, E::Load) => {
                self.load_token += 1;
                self.phase = P::Loading;
                self.pending = None;
                let token = self.load_token;
                (self, vec![PageIntent::Fetch { token }])
            }
            (_, E::Loaded { token, .. }) | (_, E::LoadFailed { token })
                if token != self.load_token =>
            {
                log::debug!("discarding stale page response (token {token})");
                (self, vec![])
            }
            (P::Loading, E::Loaded { values, .. }) => {
                self.phase = P::Ready;
                self.values = values.clone();
                (self, vec![PageIntent::ShowValues(values)])
            }
            (P::Loading, E::LoadFailed { .. }) => {
                self.phase = P::LoadFailed;
                (self, vec![])
            }

            (P::Ready, E::Save(values)) => self.submit(values, SubmitAction::Save, rules),
            (P::Ready, E::SubmitAndAdvance(values)) => {
                self.submit(values, SubmitAction::Advance, rules)
            }
            (P::Ready, E::GoBack(values)) => {
                if rules.is_terminal(&values) {
                    return (self, vec![]);
                }
                if rules.validate(&values).is_empty() {
                    self.persist(values, SubmitAction::Back, rules)
                } else {
                    self.phase = P::ConfirmPending(DiscardTarget::Previous);
                    self.pending = Some(values);
                    (self, vec![])
                }
            }
            (P::Ready, E::Exit(values)) => {
                if rules.is_terminal(&values) {
                    self.phase = P::Exited;
                    return (self, vec![PageIntent::ExitTo(ExitTarget::TerminalShow)]);
                }
                if rules.validate(&values).is_empty() {
                    self.persist(values, SubmitAction::Exit, rules)
                } else {
                    self.phase = P::ConfirmPending(DiscardTarget::Show);
                    self.pending = Some(values);
                    (self, vec![])
                }
            }

            (P::ConfirmPending(_), E::Confirm(ConfirmChoice::FixIt)) => {
                self.phase = P::Ready;
                self.pending = None;
                (self, vec![])
            }
            (P::ConfirmPending(target), E::Confirm(ConfirmChoice::Discard)) => {
                let pending = self.pending.take().unwrap_or(Value::Null);
                match target {
                    DiscardTarget::Previous => {
                        self.phase = P::Retreated;
                        (self, vec![PageIntent::Retreat(pending)])
                    }
                    DiscardTarget::Show => {
                        self.phase = P::Exited;
                        (self, vec![PageIntent::ExitTo(ExitTarget::RecordShow)])
                    }
                }
            }

            (P::Submitting(action), E::Persisted(record)) => {
                let submitted = self.pending.take().unwrap_or(Value::Null);
                match action {
                    SubmitAction::Save => {
                        self.phase = P::Ready;
                        self.values = record.clone();
                        (self, vec![PageIntent::ShowValues(record)])
                    }
                    SubmitAction::Advance => {
                        self.phase = P::Advanced;
                        self.values = submitted.clone();
                        (self, vec![PageIntent::Advance(submitted)])
                    }
                    SubmitAction::Back => {
                        self.phase = P::Retreated;
                        self.values = submitted.clone();
                        (self, vec![PageIntent::Retreat(submitted)])
                    }
                    SubmitAction::Exit => {
                        self.phase = P::Exited;
                        (self, vec![PageIntent::ExitTo(ExitTarget::RecordShow)])
                    }
                }
            }
            (P::Submitting(_), E::PersistFailed)
            | (P::Advanced, E::AdvanceFailed)
            | (P::Retreated, E::RetreatFailed) => {
                self.phase = P::Ready;
                self.pending = None;
                (self, vec![])
            }

            (phase, event) => {
                log::debug!("page event {event:?} ignored in phase {phase:?}");
                (self, vec![])
            }
        }
    }

    /// Save and advance share the same gate: no-op while terminal or invalid
    fn submit(
        self,
        values: Value,
        action: SubmitAction,
        rules: &impl PageRules,
    ) -> (Self, Vec<PageIntent>) {
        if rules.is_terminal(&values) || !rules.validate(&values).is_empty() {
            return (self, vec![]);
        }
        self.persist(values, action, rules)
    }

    fn persist(
        mut self,
        values: Value,
        then: SubmitAction,
        rules: &impl PageRules,
    ) -> (Self, Vec<PageIntent>) {
        let payload = rules.normalize_for_save(&values);
        self.phase = PagePhase::Submitting(then);
        self.pending = Some(values);
        (
            self,
            vec![PageIntent::Persist {
                values: payload,
                then,
            }],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::ErrorKind;
    use serde_json::json;

    /// `name` is required; `status == "DONE"` is terminal
    struct Rules;

    impl PageRules for Rules {
        fn validate(&self, values: &Value) -> FieldErrors {
            let mut errors = FieldErrors::new();
            if values.get("name").and_then(Value::as_str).unwrap_or("").is_empty() {
                errors.insert("name".to_string(), ErrorKind::Required);
            }
            errors
        }

        fn normalize_for_save(&self, values: &Value) -> Value {
            let mut out = values.clone();
            if out.get("comments").map_or(true, Value::is_null) {
                out["comments"] = json!("");
            }
            out
        }

        fn is_terminal(&self, values: &Value) -> bool {
            values.get("status") == Some(&json!("DONE"))
        }
    }

    fn loaded(values: Value) -> PageState {
        let (state, _) = PageState::loading().step(PageEvent::Load, &Rules);
        let token = state.load_token();
        state.step(PageEvent::Loaded { token, values }, &Rules).0
    }

    #[test]
    fn test_load_shows_values() {
        let (state, intents) = PageState::loading().step(PageEvent::Load, &Rules);
        assert_eq!(intents, vec![PageIntent::Fetch { token: 1 }]);
        let (state, intents) = state.step(
            PageEvent::Loaded {
                token: 1,
                values: json!({"name": "A"}),
            },
            &Rules,
        );
        assert_eq!(state.phase, PagePhase::Ready);
        assert_eq!(intents, vec![PageIntent::ShowValues(json!({"name": "A"}))]);
    }

    #[test]
    fn test_stale_load_discarded() {
        let (state, _) = PageState::loading().step(PageEvent::Load, &Rules);
        let (state, _) = state.step(PageEvent::Load, &Rules);
        let (state, intents) = state.step(
            PageEvent::Loaded {
                token: 1,
                values: json!({"name": "old"}),
            },
            &Rules,
        );
        assert_eq!(state.phase, PagePhase::Loading);
        assert!(intents.is_empty());
    }

    #[test]
    fn test_load_failure_is_recoverable() {
        let (state, _) = PageState::loading().step(PageEvent::Load, &Rules);
        let (state, _) = state.step(PageEvent::LoadFailed { token: 1 }, &Rules);
        assert_eq!(state.phase, PagePhase::LoadFailed);
        let (state, intents) = state.step(PageEvent::Load, &Rules);
        assert_eq!(state.phase, PagePhase::Loading);
        assert_eq!(intents, vec![PageIntent::Fetch { token: 2 }]);
    }

    #[test]
    fn test_invalid_advance_is_silent_noop() {
        let state = loaded(json!({"name": ""}));
        let (state, intents) = state.step(PageEvent::SubmitAndAdvance(json!({"name": ""})), &Rules);
        assert_eq!(state.phase, PagePhase::Ready);
        assert!(intents.is_empty());
    }

    #[test]
    fn test_advance_persists_normalized_then_advances() {
        let state = loaded(json!({"name": "A"}));
        let (state, intents) = state.step(PageEvent::SubmitAndAdvance(json!({"name": "A"})), &Rules);
        assert_eq!(state.phase, PagePhase::Submitting(SubmitAction::Advance));
        assert_eq!(
            intents,
            vec![PageIntent::Persist {
                values: json!({"name": "A", "comments": ""}),
                then: SubmitAction::Advance,
            }]
        );

        let (state, intents) = state.step(PageEvent::Persisted(json!({"id": "1"})), &Rules);
        assert_eq!(state.phase, PagePhase::Advanced);
        assert_eq!(intents, vec![PageIntent::Advance(json!({"name": "A"}))]);
    }

    #[test]
    fn test_save_replaces_values_with_record() {
        let state = loaded(json!({"name": "A"}));
        let (state, _) = state.step(PageEvent::Save(json!({"name": "B"})), &Rules);
        let (state, intents) =
            state.step(PageEvent::Persisted(json!({"name": "B", "id": "9"})), &Rules);
        assert_eq!(state.phase, PagePhase::Ready);
        assert_eq!(state.values, json!({"name": "B", "id": "9"}));
        assert_eq!(
            intents,
            vec![PageIntent::ShowValues(json!({"name": "B", "id": "9"}))]
        );
    }

    #[test]
    fn test_persist_failure_returns_to_ready() {
        let state = loaded(json!({"name": "A"}));
        let (state, _) = state.step(PageEvent::Save(json!({"name": "A"})), &Rules);
        let (state, intents) = state.step(PageEvent::PersistFailed, &Rules);
        assert_eq!(state.phase, PagePhase::Ready);
        assert!(intents.is_empty());
    }

    #[test]
    fn test_back_with_invalid_values_needs_confirmation() {
        let state = loaded(json!({"name": ""}));
        let (state, intents) = state.step(PageEvent::GoBack(json!({"name": ""})), &Rules);
        assert_eq!(state.phase, PagePhase::ConfirmPending(DiscardTarget::Previous));
        assert!(intents.is_empty());

        let (fixed, intents) = state.clone().step(PageEvent::Confirm(ConfirmChoice::FixIt), &Rules);
        assert_eq!(fixed.phase, PagePhase::Ready);
        assert!(intents.is_empty());

        let (gone, intents) = state.step(PageEvent::Confirm(ConfirmChoice::Discard), &Rules);
        assert_eq!(gone.phase, PagePhase::Retreated);
        assert_eq!(intents, vec![PageIntent::Retreat(json!({"name": ""}))]);
    }

    #[test]
    fn test_back_with_valid_values_persists_first() {
        let state = loaded(json!({"name": "A"}));
        let (state, intents) = state.step(PageEvent::GoBack(json!({"name": "A"})), &Rules);
        assert!(matches!(
            intents.as_slice(),
            [PageIntent::Persist {
                then: SubmitAction::Back,
                ..
            }]
        ));
        let (_, intents) = state.step(PageEvent::Persisted(json!({})), &Rules);
        assert_eq!(intents, vec![PageIntent::Retreat(json!({"name": "A"}))]);
    }

    #[test]
    fn test_failed_retreat_reopens_the_page() {
        let state = loaded(json!({"name": "A"}));
        let (state, _) = state.step(PageEvent::GoBack(json!({"name": "A"})), &Rules);
        let (state, _) = state.step(PageEvent::Persisted(json!({})), &Rules);
        assert_eq!(state.phase, PagePhase::Retreated);

        let (state, intents) = state.step(PageEvent::RetreatFailed, &Rules);
        assert_eq!(state.phase, PagePhase::Ready);
        assert!(intents.is_empty());

        let (_, intents) = state.step(PageEvent::Save(json!({"name": "B"})), &Rules);
        assert!(matches!(
            intents.as_slice(),
            [PageIntent::Persist {
                then: SubmitAction::Save,
                ..
            }]
        ));
    }

    #[test]
    fn test_exit_with_invalid_values_discards_to_show_view() {
        let state = loaded(json!({"name": ""}));
        let (state, _) = state.step(PageEvent::Exit(json!({"name": ""})), &Rules);
        assert_eq!(state.phase, PagePhase::ConfirmPending(DiscardTarget::Show));
        let (state, intents) = state.step(PageEvent::Confirm(ConfirmChoice::Discard), &Rules);
        assert_eq!(state.phase, PagePhase::Exited);
        assert_eq!(intents, vec![PageIntent::ExitTo(ExitTarget::RecordShow)]);
    }

    #[test]
    fn test_terminal_record_blocks_mutations() {
        let done = json!({"name": "A", "status": "DONE"});
        let state = loaded(done.clone());
        assert!(!state.can_submit(&Rules, &done));

        for event in [
            PageEvent::Save(done.clone()),
            PageEvent::SubmitAndAdvance(done.clone()),
            PageEvent::GoBack(done.clone()),
        ] {
            let (next, intents) = state.clone().step(event, &Rules);
            assert_eq!(next.phase, PagePhase::Ready);
            assert!(intents.is_empty());
        }

        let (state, intents) = state.step(PageEvent::Exit(done), &Rules);
        assert_eq!(state.phase, PagePhase::Exited);
        assert_eq!(intents, vec![PageIntent::ExitTo(ExitTarget::TerminalShow)]);
    }

    #[test]
    fn test_events_outside_their_phase_are_ignored() {
        let state = loaded(json!({"name": "A"}));
        let (state, intents) = state.step(PageEvent::Persisted(json!({})), &Rules);
        assert_eq!(state.phase, PagePhase::Ready);
        assert!(intents.is_empty());
    }
}
