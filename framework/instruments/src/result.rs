use std::time::Duration;

/// The outcome of one simulated user's complete scenario execution.
///
/// Exactly one of these exists per spawned unit. It is created once, when the
/// unit finishes, and never modified afterwards. `error` is present exactly
/// when `success` is false, which only holds when results are built through
/// [RunResult::pass] and [RunResult::fail]; construct them no other way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// 1-based ordinal of the unit, unique within a run.
    pub user_id: u32,
    pub success: bool,
    /// Wall-clock duration of the unit's full scenario execution, including
    /// session setup and teardown.
    pub elapsed_ms: u64,
    /// The captured failure description.
    pub error: Option<String>,
}

impl RunResult {
    pub fn pass(user_id: u32, elapsed: Duration) -> Self {
        Self {
            user_id,
            success: true,
            elapsed_ms: elapsed.as_millis() as u64,
            error: None,
        }
    }

    pub fn fail(user_id: u32, elapsed: Duration, error: impl Into<String>) -> Self {
        Self {
            user_id,
            success: false,
            elapsed_ms: elapsed.as_millis() as u64,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_present_exactly_when_failed() {
        let pass = RunResult::pass(1, Duration::from_millis(120));
        assert!(pass.success);
        assert!(pass.error.is_none());

        let fail = RunResult::fail(2, Duration::from_millis(80), "no such element");
        assert!(!fail.success);
        assert_eq!(fail.error.as_deref(), Some("no such element"));
    }
}
