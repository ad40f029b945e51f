use chrono::{DateTime, Duration, Utc};

use crate::{ActivitySession, ActivityType, PlannedStep};

/// Recorded interval of a completed activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityMetrics {
    pub activity: ActivityType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub distance: Option<f64>,
    pub average_heart_rate: Option<f64>,
}

impl ActivityMetrics {
    #[must_use]
    pub fn new(activity: ActivityType, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            activity,
            start_date,
            end_date,
            distance: None,
            average_heart_rate: None,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end_date - self.start_date
    }
}

/// Recorded interval paired with the planned step at the same position.
///
/// Either side is `None` if there are more recorded intervals than planned steps or vice versa.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalMapping<'a> {
    pub index: usize,
    pub metrics: Option<&'a ActivityMetrics>,
    pub planned_step: Option<PlannedStep<'a>>,
}

impl ActivitySession {
    /// Pairs the recorded intervals in chronological order with the flattened plan.
    #[must_use]
    pub fn map_metrics_to_plan<'a>(
        &'a self,
        metrics: &'a [ActivityMetrics],
    ) -> Vec<IntervalMapping<'a>> {
        zip_positionally(metrics.iter().collect(), self.flattened_steps())
    }

    /// Pairs the recorded intervals of the given activity with the flattened plan of the groups
    /// of the same activity.
    #[must_use]
    pub fn map_metrics_to_plan_for<'a>(
        &'a self,
        activity: ActivityType,
        metrics: &'a [ActivityMetrics],
    ) -> Vec<IntervalMapping<'a>> {
        zip_positionally(
            metrics.iter().filter(|m| m.activity == activity).collect(),
            self.flattened_steps_for(activity),
        )
    }
}

fn zip_positionally<'a>(
    mut metrics: Vec<&'a ActivityMetrics>,
    planned_steps: Vec<PlannedStep<'a>>,
) -> Vec<IntervalMapping<'a>> {
    metrics.sort_by_key(|m| m.start_date);

    (0..metrics.len().max(planned_steps.len()))
        .map(|i| IntervalMapping {
            index: i + 1,
            metrics: metrics.get(i).copied(),
            planned_step: planned_steps.get(i).copied(),
        })
        .collect()
}
