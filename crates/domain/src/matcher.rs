use chrono::Duration;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{ActivitySession, ActivityType};

/// Activity record of a finished real-world training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedActivity {
    pub activity: ActivityType,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Accepted deviation relative to the longer of actual and estimated duration.
    pub tolerance: f64,
}

impl MatchSettings {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: if tolerance.is_nan() {
                0.0
            } else {
                tolerance.clamp(0.0, 1.0)
            },
        }
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self { tolerance: 0.1 }
    }
}

/// Find the session that most likely was performed in a completed activity.
///
/// Only sessions containing the activity type are considered. The first candidate whose
/// estimated duration lies within the tolerance is returned. If no candidate is close enough,
/// the first candidate is returned, even if its duration differs substantially.
pub fn find_matching_session<'a>(
    completed: &CompletedActivity,
    candidates: impl IntoIterator<Item = &'a ActivitySession>,
) -> Option<&'a ActivitySession> {
    find_matching_session_with(completed, candidates, &MatchSettings::default())
}

pub fn find_matching_session_with<'a>(
    completed: &CompletedActivity,
    candidates: impl IntoIterator<Item = &'a ActivitySession>,
    settings: &MatchSettings,
) -> Option<&'a ActivitySession> {
    let candidates = candidates
        .into_iter()
        .filter(|s| s.contains_activity(completed.activity))
        .collect::<Vec<_>>();

    let Some(&first) = candidates.first() else {
        debug!("no session contains activity \"{}\"", completed.activity);
        return None;
    };

    let tolerance = MatchSettings::new(settings.tolerance).tolerance;
    let actual = duration_in_seconds(completed.duration);

    for &session in &candidates {
        let estimated = duration_in_seconds(session.estimated_duration());
        if (actual - estimated).abs() <= actual.max(estimated) * tolerance {
            debug!(
                "matched session \"{}\" by duration ({actual} s, estimated {estimated} s)",
                session.name()
            );
            return Some(session);
        }
    }

    warn!(
        "no session of activity \"{}\" within tolerance of {actual} s, falling back to \"{}\"",
        completed.activity,
        first.name()
    );
    Some(first)
}

#[allow(clippy::cast_precision_loss)]
fn duration_in_seconds(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / 1000.0
}
