use std::collections::BTreeSet;

use crate::{Alert, FitnessMetric, Goal, Movement, Muscle};

/// Work interval of a workout.
///
/// Target muscles and metrics are looked up in the movement catalog on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    movement: Movement,
    goal: Goal,
    alert: Option<Alert>,
    target_muscles: BTreeSet<Muscle>,
    target_metrics: BTreeSet<FitnessMetric>,
}

impl Exercise {
    #[must_use]
    pub fn new(movement: Movement, goal: Goal) -> Self {
        Self {
            movement,
            goal,
            alert: None,
            target_muscles: movement.target_muscles().iter().copied().collect(),
            target_metrics: movement.target_metrics().iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn with_alert(self, alert: Alert) -> Self {
        Self {
            alert: Some(alert),
            ..self
        }
    }

    #[must_use]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    #[must_use]
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    #[must_use]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.movement.into()
    }

    #[must_use]
    pub fn target_muscles(&self) -> &BTreeSet<Muscle> {
        &self.target_muscles
    }

    #[must_use]
    pub fn target_metrics(&self) -> &BTreeSet<FitnessMetric> {
        &self.target_metrics
    }
}

/// Recovery interval of a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Rest {
    pub display_name: String,
    pub goal: Goal,
}

impl Rest {
    #[must_use]
    pub fn new(goal: Goal) -> Self {
        Self {
            goal,
            ..Self::default()
        }
    }
}

impl Default for Rest {
    fn default() -> Self {
        Self {
            display_name: String::from("Rest"),
            goal: Goal::Open,
        }
    }
}
