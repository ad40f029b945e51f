//! Heuristic duration estimates of planned sessions.
//!
//! The estimates are fixed rules of thumb per goal kind and movement, not measurements.

use chrono::Duration;

use crate::{
    ActivitySession, Exercise, Goal, Movement, Rest, Workout, goal::seconds_to_duration,
};

impl Exercise {
    /// Never negative.
    #[must_use]
    pub fn estimated_duration(&self) -> Duration {
        let estimate = match self.goal() {
            Goal::Time { .. } => self.goal().duration().unwrap_or_default(),
            Goal::Distance { value, unit } => {
                seconds_to_duration(seconds_per_meter(self.movement()) * unit.meters(*value))
            }
            Goal::Open => Duration::seconds(open_goal_seconds(self.movement())),
        };
        estimate.max(Duration::zero())
    }
}

impl Rest {
    /// Never negative.
    #[must_use]
    pub fn estimated_duration(&self) -> Duration {
        let estimate = match self.goal {
            Goal::Time { .. } => self.goal.duration().unwrap_or_default(),
            Goal::Open => Duration::seconds(60),
            Goal::Distance { .. } => Duration::seconds(30),
        };
        estimate.max(Duration::zero())
    }
}

impl Workout {
    /// Sum of all exercises and rest periods, multiplied by the number of iterations.
    ///
    /// Saturates at `Duration::MAX`.
    #[must_use]
    pub fn estimated_duration(&self) -> Duration {
        let pass = saturating_sum(
            self.exercises()
                .iter()
                .map(Exercise::estimated_duration)
                .chain(self.rest_periods().iter().map(Rest::estimated_duration)),
        );
        i32::try_from(self.iterations())
            .ok()
            .and_then(|iterations| pass.checked_mul(iterations))
            .unwrap_or(Duration::MAX)
    }
}

impl ActivitySession {
    /// Saturates at `Duration::MAX`.
    #[must_use]
    pub fn estimated_duration(&self) -> Duration {
        saturating_sum(self.workouts().map(Workout::estimated_duration))
    }
}

fn saturating_sum(durations: impl IntoIterator<Item = Duration>) -> Duration {
    durations
        .into_iter()
        .try_fold(Duration::zero(), |total, duration| total.checked_add(&duration))
        .unwrap_or(Duration::MAX)
}

fn seconds_per_meter(movement: Movement) -> f64 {
    match movement {
        // 6 min/km
        Movement::Run => 0.36,
        // 20 km/h
        Movement::Cycling => 0.18,
        // 4 min/km
        Movement::Sprint => 0.24,
        // 10 m/s
        _ => 0.1,
    }
}

fn open_goal_seconds(movement: Movement) -> i64 {
    match movement {
        Movement::Cycling | Movement::Run | Movement::SunSalutation => 300,
        Movement::Sprint | Movement::JumpRope => 90,
        Movement::HamstringStretch
        | Movement::QuadricepsStretch
        | Movement::CalfStretch
        | Movement::ShoulderStretch => 30,
        Movement::DownwardDog
        | Movement::WarriorOne
        | Movement::WarriorTwo
        | Movement::TrianglePose => 45,
        Movement::Meditation => 600,
        _ => 60,
    }
}
