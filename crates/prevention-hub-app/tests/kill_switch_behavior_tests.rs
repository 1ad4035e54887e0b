//! Integration tests for runtime kill-switch behavior.

use prevention_hub_app::{SCORING_ENABLED_ENV, scoring_enabled_from_env};

#[test]
fn kill_switch_behavior_tests_disables_scoring_when_env_is_false() {
    // Safety:
    // - Integration tests mutate process env in a single-threaded test body.
    // - We reset the variable before returning.
    unsafe { std::env::set_var(SCORING_ENABLED_ENV, "false") };
    assert!(!scoring_enabled_from_env());

    // Safety: see rationale above.
    unsafe { std::env::set_var(SCORING_ENABLED_ENV, " OFF ") };
    assert!(!scoring_enabled_from_env());

    // Safety: see rationale above.
    unsafe { std::env::set_var(SCORING_ENABLED_ENV, "true") };
    assert!(scoring_enabled_from_env());

    // Safety: see rationale above.
    unsafe { std::env::remove_var(SCORING_ENABLED_ENV) };
    assert!(scoring_enabled_from_env());
}
