use strum_macros::Display;

/// Progress of one remote stage. Exactly one variant holds at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum StageState<T> {
    Idle,
    Loading,
    Failed(String),
    Resolved(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum StageStatus {
    Idle,
    Loading,
    Error,
    Resolved,
}

impl<T> Default for StageState<T> {
    fn default() -> Self {
        StageState::Idle
    }
}

impl<T> StageState<T> {
    pub fn status(&self) -> StageStatus {
        match self {
            StageState::Idle => StageStatus::Idle,
            StageState::Loading => StageStatus::Loading,
            StageState::Failed(_) => StageStatus::Error,
            StageState::Resolved(_) => StageStatus::Resolved,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, StageState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, StageState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StageState::Failed(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            StageState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&T> {
        match self {
            StageState::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_variant() {
        assert_eq!(StageState::<u8>::default().status(), StageStatus::Idle);
        assert_eq!(StageState::<u8>::Loading.status(), StageStatus::Loading);

        let failed = StageState::<u8>::Failed("boom".into());
        assert_eq!(failed.status(), StageStatus::Error);
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(failed.outcome(), None);

        let resolved = StageState::Resolved(7u8);
        assert_eq!(resolved.status().to_string(), "resolved");
        assert_eq!(resolved.outcome(), Some(&7));
        assert_eq!(resolved.error(), None);
    }
}
