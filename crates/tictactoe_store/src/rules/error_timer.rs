//! Error expiry.

use super::{Effect, Rule};
use crate::action::Action;
use crate::state::AppState;
use std::time::Duration;

/// Schedules a clear for every reported error.
///
/// Each report gets its own timer. Earlier timers are not cancelled by later
/// reports or moves; clearing is idempotent, so extra clears are harmless.
#[derive(Debug, Clone, Copy, derive_new::new)]
pub struct ClearErrorAfter {
    delay: Duration,
}

impl Rule for ClearErrorAfter {
    fn name(&self) -> &'static str {
        "clear_error_after"
    }

    fn react(&self, action: &Action, _state: &AppState) -> Vec<Effect> {
        match action {
            Action::ReportError(_) => vec![Effect::After(self.delay, Action::ClearError)],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_report_schedules_a_clear() {
        let rule = ClearErrorAfter::new(Duration::from_secs(2));
        let state = AppState::new();
        let report = Action::ReportError("Square taken!".into());

        for _ in 0..2 {
            assert_eq!(
                rule.react(&report, &state),
                vec![Effect::After(Duration::from_secs(2), Action::ClearError)]
            );
        }
        assert!(rule.react(&Action::ClearError, &state).is_empty());
    }
}
