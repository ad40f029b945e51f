use crate::{ActivitySession, CompletedActivity, MatchSettings, find_matching_session_with};

/// Sessions available for training, separated into regular and mind and body sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionCatalog {
    activity_sessions: Vec<ActivitySession>,
    mind_and_body_sessions: Vec<ActivitySession>,
}

impl SessionCatalog {
    /// Categorises the sessions while keeping their relative order.
    #[must_use]
    pub fn new(sessions: impl IntoIterator<Item = ActivitySession>) -> Self {
        let (mind_and_body_sessions, activity_sessions) = sessions
            .into_iter()
            .partition(ActivitySession::is_mind_and_body);
        Self {
            activity_sessions,
            mind_and_body_sessions,
        }
    }

    #[must_use]
    pub fn activity_sessions(&self) -> &[ActivitySession] {
        &self.activity_sessions
    }

    #[must_use]
    pub fn mind_and_body_sessions(&self) -> &[ActivitySession] {
        &self.mind_and_body_sessions
    }

    /// Regular sessions followed by mind and body sessions.
    pub fn all(&self) -> impl Iterator<Item = &ActivitySession> {
        self.activity_sessions
            .iter()
            .chain(&self.mind_and_body_sessions)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.activity_sessions.len() + self.mind_and_body_sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn find_matching_session(&self, completed: &CompletedActivity) -> Option<&ActivitySession> {
        self.find_matching_session_with(completed, &MatchSettings::default())
    }

    #[must_use]
    pub fn find_matching_session_with(
        &self,
        completed: &CompletedActivity,
        settings: &MatchSettings,
    ) -> Option<&ActivitySession> {
        find_matching_session_with(completed, self.all(), settings)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use chrono::Duration;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ActivityType, Name, default_sessions};

    static CATALOG: LazyLock<SessionCatalog> =
        LazyLock::new(|| SessionCatalog::new(default_sessions()));

    fn names<'a>(sessions: impl IntoIterator<Item = &'a ActivitySession>) -> Vec<String> {
        sessions
            .into_iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    #[test]
    fn test_session_catalog_new() {
        assert_eq!(
            names(CATALOG.activity_sessions()),
            ["Upper Body", "Lower Body", "Mixed Cardio"]
        );
        assert_eq!(names(CATALOG.mind_and_body_sessions()), ["Yoga Flow"]);
        assert_eq!(
            names(CATALOG.all()),
            ["Upper Body", "Lower Body", "Mixed Cardio", "Yoga Flow"]
        );
        assert_eq!(CATALOG.len(), 4);
        assert!(!CATALOG.is_empty());
    }

    #[test]
    fn test_session_catalog_empty_session_is_mind_and_body() {
        let catalog =
            SessionCatalog::new([ActivitySession::new(Name::new("Empty").unwrap(), vec![])]);
        assert!(catalog.activity_sessions().is_empty());
        assert_eq!(names(catalog.mind_and_body_sessions()), ["Empty"]);
        assert!(SessionCatalog::default().is_empty());
    }

    #[test]
    fn test_session_catalog_find_matching_session() {
        let completed = CompletedActivity {
            activity: ActivityType::Yoga,
            duration: Duration::seconds(1400),
        };
        assert_eq!(
            CATALOG
                .find_matching_session(&completed)
                .map(|s| s.name().to_string()),
            Some("Yoga Flow".to_string())
        );
        let completed = CompletedActivity {
            activity: ActivityType::Pilates,
            duration: Duration::seconds(1400),
        };
        assert_eq!(CATALOG.find_matching_session(&completed), None);
    }

    // "Upper Body" (1800 s) lies within 10 % of 1860 s and precedes "Lower Body" (1860 s), so the
    // first candidate within tolerance wins although "Lower Body" matches exactly.
    #[test]
    fn test_session_catalog_find_matching_session_first_within_tolerance() {
        let completed = CompletedActivity {
            activity: ActivityType::TraditionalStrengthTraining,
            duration: Duration::seconds(1860),
        };
        assert_eq!(
            CATALOG
                .find_matching_session(&completed)
                .map(|s| s.name().to_string()),
            Some("Upper Body".to_string())
        );
        assert_eq!(
            CATALOG
                .find_matching_session_with(&completed, &MatchSettings::new(0.0))
                .map(|s| s.name().to_string()),
            Some("Lower Body".to_string())
        );
    }

    #[test]
    fn test_session_catalog_find_matching_session_fallback() {
        let completed = CompletedActivity {
            activity: ActivityType::Cycling,
            duration: Duration::seconds(7200),
        };
        assert_eq!(
            CATALOG
                .find_matching_session(&completed)
                .map(|s| s.name().to_string()),
            Some("Lower Body".to_string())
        );
    }
}
