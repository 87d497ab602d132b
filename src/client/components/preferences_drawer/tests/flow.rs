//! Tests for the sign-up flow state machine.

use crate::client::components::preferences_drawer::{FlowAction, SignupFlow};

/// A successful sign-up proceeds to submitting preferences.
#[test]
fn successful_signup_submits_preferences() {
    let mut flow = SignupFlow::default();
    assert_eq!(flow.after_signup(true), FlowAction::SubmitPreferences);
}

/// A failed sign-up aborts before preferences are attempted.
#[test]
fn failed_signup_aborts() {
    let mut flow = SignupFlow::default();
    assert_eq!(flow.after_signup(false), FlowAction::Abort);
    assert_eq!(flow.after_preferences(true), FlowAction::Abort);
}

/// Both steps succeeding completes the flow.
#[test]
fn both_steps_complete_the_flow() {
    let mut flow = SignupFlow::default();
    flow.after_signup(true);
    assert_eq!(flow.after_preferences(true), FlowAction::Complete);
}

/// A preference failure after a successful sign-up aborts without undoing
/// the created account.
#[test]
fn preference_failure_aborts() {
    let mut flow = SignupFlow::default();
    flow.after_signup(true);
    assert_eq!(flow.after_preferences(false), FlowAction::Abort);
}
