//! Built-in sessions that are available without any user-defined sessions.

use crate::{
    ActivityGroup, ActivitySession, ActivityType, Alert, Exercise, Goal, Location, Movement,
    Name, Rest, SpeedUnit, Workout, WorkoutType,
};

/// Built-in regular sessions.
#[must_use]
pub fn default_activity_sessions() -> Vec<ActivitySession> {
    vec![upper_body(), lower_body(), mixed_cardio()]
}

/// Built-in mind and body sessions.
#[must_use]
pub fn default_mind_and_body_sessions() -> Vec<ActivitySession> {
    vec![yoga_flow()]
}

/// All built-in sessions, marked as prebuilt.
#[must_use]
pub fn default_sessions() -> Vec<ActivitySession> {
    default_activity_sessions()
        .into_iter()
        .chain(default_mind_and_body_sessions())
        .map(|s| s.with_prebuilt(true))
        .collect()
}

fn open(movement: Movement) -> Exercise {
    Exercise::new(movement, Goal::Open)
}

fn timed(movement: Movement, seconds: f64) -> Exercise {
    Exercise::new(movement, Goal::seconds(seconds))
}

fn sets(movement: Movement, workout_type: WorkoutType) -> Workout {
    Workout::new(vec![open(movement)], vec![Rest::default()])
        .with_iterations(3)
        .with_workout_type(workout_type)
}

fn cycling_warmup() -> Workout {
    Workout::new(
        vec![timed(Movement::Cycling, 300.0).with_alert(Alert::HeartRateZone(2))],
        vec![],
    )
    .with_workout_type(WorkoutType::Warmup)
}

fn upper_body() -> ActivitySession {
    let short_rest = Rest::new(Goal::seconds(30.0));
    ActivitySession::single_activity(
        vec![
            Workout::new(
                vec![open(Movement::PullUps), open(Movement::ChestDips)],
                vec![short_rest.clone(), short_rest],
            )
            .with_iterations(2)
            .with_workout_type(WorkoutType::DynamicWarmup),
            sets(Movement::LatPulldowns, WorkoutType::FunctionalStrengthWorkout),
            sets(Movement::BenchPress, WorkoutType::FunctionalStrengthWorkout),
            sets(Movement::ChestFlys, WorkoutType::MuscularEnduranceWorkout),
            sets(Movement::CablePullover, WorkoutType::MuscularEnduranceWorkout),
        ],
        ActivityType::TraditionalStrengthTraining,
        Location::Indoor,
        Some(Name::from_static("Upper Body")),
    )
}

fn lower_body() -> ActivitySession {
    ActivitySession::new(
        Name::from_static("Lower Body"),
        vec![
            ActivityGroup::new(ActivityType::Cycling, Location::Indoor, vec![cycling_warmup()]),
            ActivityGroup::new(
                ActivityType::TraditionalStrengthTraining,
                Location::Indoor,
                vec![
                    Workout::new(
                        vec![open(Movement::Adductors), open(Movement::Abductors)],
                        vec![Rest::default(), Rest::default()],
                    )
                    .with_iterations(2)
                    .with_workout_type(WorkoutType::FunctionalWarmup),
                    sets(Movement::BarbellBackSquat, WorkoutType::FunctionalStrengthWorkout),
                    sets(Movement::BarbellDeadlifts, WorkoutType::FunctionalStrengthWorkout),
                    sets(Movement::CalfRaises, WorkoutType::FunctionalStabilityWorkout),
                ],
            ),
        ],
    )
}

fn mixed_cardio() -> ActivitySession {
    ActivitySession::new(
        Name::from_static("Mixed Cardio"),
        vec![
            ActivityGroup::new(ActivityType::Cycling, Location::Indoor, vec![cycling_warmup()]),
            ActivityGroup::new(
                ActivityType::Running,
                Location::Indoor,
                vec![
                    Workout::new(
                        vec![timed(Movement::Run, 1800.0).with_alert(Alert::SpeedThreshold {
                            value: 10.0,
                            unit: SpeedUnit::KilometersPerHour,
                        })],
                        vec![],
                    )
                    .with_workout_type(WorkoutType::AerobicEnduranceWorkout),
                ],
            ),
            ActivityGroup::new(
                ActivityType::JumpRope,
                Location::Indoor,
                vec![
                    Workout::new(
                        vec![timed(Movement::JumpRope, 90.0).with_alert(Alert::HeartRateZone(4))],
                        vec![Rest::new(Goal::seconds(30.0))],
                    )
                    .with_iterations(3)
                    .with_workout_type(WorkoutType::AnaerobicEnduranceWorkout),
                ],
            ),
        ],
    )
}

fn yoga_flow() -> ActivitySession {
    let short_rest = Rest::new(Goal::seconds(10.0));
    let transition_rest = Rest::new(Goal::seconds(5.0));
    ActivitySession::single_activity(
        vec![
            Workout::new(
                vec![
                    timed(Movement::MountainPose, 30.0),
                    timed(Movement::CatCowPose, 60.0),
                    timed(Movement::ChildsPose, 30.0),
                ],
                vec![
                    transition_rest.clone(),
                    transition_rest.clone(),
                    short_rest.clone(),
                ],
            )
            .with_workout_type(WorkoutType::Warmup),
            Workout::new(
                vec![
                    timed(Movement::SunSalutation, 300.0),
                    timed(Movement::WarriorOne, 45.0),
                    timed(Movement::WarriorTwo, 45.0),
                    timed(Movement::TrianglePose, 45.0),
                ],
                vec![
                    short_rest.clone(),
                    transition_rest.clone(),
                    transition_rest.clone(),
                    short_rest,
                ],
            )
            .with_iterations(2),
            Workout::new(
                vec![
                    timed(Movement::DownwardDog, 60.0),
                    timed(Movement::CobraPose, 45.0),
                    timed(Movement::ChildsPose, 120.0),
                ],
                vec![transition_rest.clone(), transition_rest, Rest::default()],
            )
            .with_workout_type(WorkoutType::Cooldown),
        ],
        ActivityType::Yoga,
        Location::Indoor,
        Some(Name::from_static("Yoga Flow")),
    )
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_default_sessions() {
        let sessions = default_sessions();
        assert_eq!(
            sessions
                .iter()
                .map(|s| s.name().to_string())
                .collect::<Vec<_>>(),
            ["Upper Body", "Lower Body", "Mixed Cardio", "Yoga Flow"]
        );
        assert!(sessions.iter().all(ActivitySession::is_prebuilt));
        assert!(!default_activity_sessions()[0].is_prebuilt());
    }

    #[test]
    fn test_default_sessions_categories() {
        assert!(
            default_activity_sessions()
                .iter()
                .all(|s| !s.is_mind_and_body())
        );
        assert!(
            default_mind_and_body_sessions()
                .iter()
                .all(ActivitySession::is_mind_and_body)
        );
    }

    #[rstest]
    #[case("Upper Body", 1800, 32)]
    #[case("Lower Body", 1860, 27)]
    #[case("Mixed Cardio", 2460, 8)]
    #[case("Yoga Flow", 1365, 28)]
    fn test_default_session(
        #[case] name: &str,
        #[case] estimated_seconds: i64,
        #[case] steps: usize,
    ) {
        let sessions = default_sessions();
        let session = sessions
            .iter()
            .find(|s| s.name().as_str() == name)
            .unwrap();
        assert_eq!(
            session.estimated_duration(),
            Duration::seconds(estimated_seconds)
        );
        assert_eq!(session.flattened_steps().len(), steps);
    }

    #[test]
    fn test_mixed_cardio_groups() {
        let session = mixed_cardio();
        assert_eq!(
            session
                .activity_groups()
                .iter()
                .map(ActivityGroup::activity)
                .collect::<Vec<_>>(),
            [
                ActivityType::Cycling,
                ActivityType::Running,
                ActivityType::JumpRope
            ]
        );
        assert_eq!(session.activity(), ActivityType::Cycling);
        assert_eq!(session.location(), Location::Indoor);
        assert_eq!(session.flattened_steps_for(ActivityType::JumpRope).len(), 6);
    }
}
