//! Feedback form state and the submission lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model owns everything the feedback page renders: the two raw field
//! values and the submission phase. All mutation goes through reducer
//! methods, and the timed part of the flow is split in two so the page can
//! own the actual browser timer: `submit` decides whether a confirmation
//! must be scheduled, `finish_submission` applies it when the delay fires.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::validate::is_valid_submission;

/// Delay between an accepted submission and the confirmation becoming
/// visible, in milliseconds.
pub const CONFIRMATION_DELAY_MS: u32 = 1_500;

/// Submission lifecycle for the feedback form.
///
/// There is no transition back to [`Idle`](SubmitPhase::Idle); the form
/// resets only by remounting the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// No submission has been accepted yet.
    #[default]
    Idle,
    /// A validated submission was accepted; the confirmation delay is running.
    Pending {
        /// Name field value at the moment the submission was accepted.
        name: String,
    },
    /// The delay elapsed; the confirmation is visible.
    Confirmed {
        /// Name the confirmation text interpolates.
        name: String,
    },
}

/// Feedback form state: raw field values plus the submission phase.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    /// Raw contents of the name input.
    pub name: String,
    /// Raw contents of the message textarea.
    pub message: String,
    /// Where the form is in the submission lifecycle.
    pub phase: SubmitPhase,
}

impl FormState {
    /// Replace the name field with the latest input value.
    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    /// Replace the message field with the latest input value.
    pub fn set_message(&mut self, value: String) {
        self.message = value;
    }

    /// Handle a submit action.
    ///
    /// Returns `true` when the submission was accepted, in which case the
    /// caller must schedule [`finish_submission`](Self::finish_submission)
    /// after [`CONFIRMATION_DELAY_MS`]. A rejected submission leaves the
    /// form unchanged and shows no error. Submits while a delay is already
    /// running, or after the confirmation is shown, are ignored.
    pub fn submit(&mut self) -> bool {
        if !matches!(self.phase, SubmitPhase::Idle) {
            return false;
        }
        if !is_valid_submission(&self.name, &self.message) {
            return false;
        }
        self.phase = SubmitPhase::Pending { name: self.name.clone() };
        true
    }

    /// Apply the delayed confirmation.
    ///
    /// No-op unless a submission is pending, so a stale timer can never
    /// force a confirmation.
    pub fn finish_submission(&mut self) {
        self.phase = match std::mem::take(&mut self.phase) {
            SubmitPhase::Pending { name } => SubmitPhase::Confirmed { name },
            other => other,
        };
    }

    /// Whether the confirmation is visible.
    #[must_use]
    pub fn submitted(&self) -> bool {
        matches!(self.phase, SubmitPhase::Confirmed { .. })
    }

    /// Confirmation text, present once the delay has elapsed.
    ///
    /// Interpolates the name as of submission time, not the current field
    /// value.
    #[must_use]
    pub fn confirmation_message(&self) -> Option<String> {
        match &self.phase {
            SubmitPhase::Confirmed { name } => {
                Some(format!("Спасибо, {name}! Ваше сообщение отправлено."))
            }
            SubmitPhase::Idle | SubmitPhase::Pending { .. } => None,
        }
    }
}
