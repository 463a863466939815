// src/wizard.rs
// Shared wizard state: current step + selection. Owned by App via use_reducer.

use std::rc::Rc;

use yew::Reducible;

use crate::selection::SelectionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Select,
    Compare,
    Verify,
}

impl WizardStep {
    pub fn next(self) -> Self {
        match self {
            WizardStep::Select => WizardStep::Compare,
            WizardStep::Compare => WizardStep::Verify,
            WizardStep::Verify => WizardStep::Verify,
        }
    }

    pub fn back(self) -> Self {
        match self {
            WizardStep::Select => WizardStep::Select,
            WizardStep::Compare => WizardStep::Select,
            WizardStep::Verify => WizardStep::Compare,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Select => "select",
            WizardStep::Compare => "compare",
            WizardStep::Verify => "verify",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    Toggle(String),
    Next,
    Back,
    /// Jump to the selection screen, keeping whatever is selected.
    Restart,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub selection: SelectionSet,
}

impl WizardState {
    /// Whether the "Find My Insurance Plans" button is enabled.
    /// Only a UI hint: `Next` is not guarded by it.
    pub fn can_proceed(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn apply(&mut self, action: WizardAction) {
        match action {
            WizardAction::Toggle(id) => self.selection.toggle(&id),
            WizardAction::Next => self.step = self.step.next(),
            WizardAction::Back => self.step = self.step.back(),
            WizardAction::Restart => self.step = WizardStep::Select,
        }
    }
}

impl Reducible for WizardState {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Header line on the comparison screen.
pub fn comparison_subtitle(selection: &SelectionSet) -> String {
    format!("Plans matched to your selected areas: {}", selection.joined(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: WizardState, action: WizardAction) -> WizardState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn starts_on_select_with_empty_selection() {
        let s = WizardState::default();
        assert_eq!(s.step, WizardStep::Select);
        assert!(s.selection.is_empty());
        assert!(!s.can_proceed());
    }

    #[test]
    fn forward_and_back_transitions() {
        let mut s = WizardState::default();
        s.apply(WizardAction::Next);
        assert_eq!(s.step, WizardStep::Compare);
        s.apply(WizardAction::Back);
        assert_eq!(s.step, WizardStep::Select);

        s.apply(WizardAction::Next);
        s.apply(WizardAction::Next);
        assert_eq!(s.step, WizardStep::Verify);
        s.apply(WizardAction::Back);
        assert_eq!(s.step, WizardStep::Compare);
    }

    #[test]
    fn edges_are_no_ops() {
        assert_eq!(WizardStep::Select.back(), WizardStep::Select);
        assert_eq!(WizardStep::Verify.next(), WizardStep::Verify);
    }

    #[test]
    fn next_is_not_blocked_by_empty_selection() {
        let s = reduce(WizardState::default(), WizardAction::Next);
        assert_eq!(s.step, WizardStep::Compare);
        assert!(!s.can_proceed());
    }

    #[test]
    fn proceed_enabled_iff_selection_non_empty() {
        let mut s = WizardState::default();
        s.apply(WizardAction::Toggle("legs".into()));
        assert!(s.can_proceed());
        s.apply(WizardAction::Toggle("legs".into()));
        assert!(!s.can_proceed());
    }

    #[test]
    fn restart_keeps_selection() {
        let mut s = WizardState::default();
        s.apply(WizardAction::Toggle("head".into()));
        s.apply(WizardAction::Next);
        s.apply(WizardAction::Restart);
        assert_eq!(s.step, WizardStep::Select);
        assert!(s.selection.contains("head"));
    }

    #[test]
    fn reducer_returns_same_rc_when_nothing_changes() {
        let state = Rc::new(WizardState::default());
        let after = state.clone().reduce(WizardAction::Back);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn subtitle_lists_ids_in_selection_order() {
        let s = [WizardAction::Toggle("heart".into()), WizardAction::Toggle("eyes".into())]
            .into_iter()
            .fold(WizardState::default(), reduce);
        let line = comparison_subtitle(&s.selection);
        assert!(line.contains("heart, eyes"), "{line}");
    }
}
