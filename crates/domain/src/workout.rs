use std::collections::BTreeSet;

use crate::{Exercise, FitnessMetric, Muscle, Rest, WorkoutType};

/// Block of exercises and rest periods that is repeated `iterations` times.
///
/// The rest period at index `i` follows the exercise at index `i`. There may be fewer rest
/// periods than exercises, in which case the trailing exercises are not followed by a rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    exercises: Vec<Exercise>,
    rest_periods: Vec<Rest>,
    iterations: u32,
    workout_type: Option<WorkoutType>,
    target_muscles: BTreeSet<Muscle>,
    target_metrics: BTreeSet<FitnessMetric>,
}

impl Workout {
    #[must_use]
    pub fn new(exercises: Vec<Exercise>, rest_periods: Vec<Rest>) -> Self {
        let target_muscles = exercises
            .iter()
            .flat_map(|e| e.target_muscles().iter().copied())
            .collect();
        let target_metrics = exercises
            .iter()
            .flat_map(|e| e.target_metrics().iter().copied())
            .collect();
        Self {
            exercises,
            rest_periods,
            iterations: 1,
            workout_type: None,
            target_muscles,
            target_metrics,
        }
    }

    /// Values below one are treated as a single iteration.
    #[must_use]
    pub fn with_iterations(self, iterations: i64) -> Self {
        Self {
            iterations: u32::try_from(iterations.max(1)).unwrap_or(u32::MAX),
            ..self
        }
    }

    #[must_use]
    pub fn with_workout_type(self, workout_type: WorkoutType) -> Self {
        Self {
            workout_type: Some(workout_type),
            ..self
        }
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn rest_periods(&self) -> &[Rest] {
        &self.rest_periods
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn workout_type(&self) -> Option<WorkoutType> {
        self.workout_type
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Goal, Movement};

    #[rstest]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(0, 1)]
    #[case(-2, 1)]
    fn test_workout_iterations(#[case] iterations: i64, #[case] expected: u32) {
        assert_eq!(
            Workout::new(vec![], vec![])
                .with_iterations(iterations)
                .iterations(),
            expected
        );
    }

    #[test]
    fn test_workout_defaults() {
        let workout = Workout::new(vec![], vec![]);
        assert_eq!(workout.iterations(), 1);
        assert_eq!(workout.workout_type(), None);
        assert!(workout.target_muscles().is_empty());
        assert!(workout.target_metrics().is_empty());
    }

    #[test]
    fn test_workout_targets_deduplicated() {
        let workout = Workout::new(
            vec![
                Exercise::new(Movement::PullUps, Goal::Open),
                Exercise::new(Movement::PullUps, Goal::Open),
                Exercise::new(Movement::BicepCurls, Goal::Open),
            ],
            vec![Rest::default()],
        )
        .with_workout_type(WorkoutType::StrengthWorkout);
        assert_eq!(
            workout.target_muscles(),
            &BTreeSet::from([Muscle::Back, Muscle::Lats, Muscle::Biceps])
        );
        assert_eq!(
            workout.target_metrics(),
            &BTreeSet::from([
                FitnessMetric::Strength,
                FitnessMetric::MuscularEndurance,
                FitnessMetric::Power
            ])
        );
        assert_eq!(workout.workout_type(), Some(WorkoutType::StrengthWorkout));
    }
}
