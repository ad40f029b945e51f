use std::sync::LazyLock;

use repset_domain as domain;

pub static SESSIONS: LazyLock<Vec<domain::ActivitySession>> =
    LazyLock::new(|| vec![SESSION.clone(), SESSION_2.clone()]);

pub static SESSION: LazyLock<domain::ActivitySession> = LazyLock::new(|| {
    domain::ActivitySession::new(
        domain::Name::new("Intervals").unwrap(),
        vec![
            domain::ActivityGroup::new(
                domain::ActivityType::Cycling,
                domain::Location::Outdoor,
                vec![
                    domain::Workout::new(
                        vec![
                            domain::Exercise::new(
                                domain::Movement::Cycling,
                                domain::Goal::Distance {
                                    value: 2.5,
                                    unit: domain::LengthUnit::Kilometers,
                                },
                            )
                            .with_alert(domain::Alert::PowerRange {
                                low: 200.0,
                                high: 250.0,
                            }),
                        ],
                        vec![domain::Rest::new(domain::Goal::Time {
                            value: 2.0,
                            unit: domain::TimeUnit::Minutes,
                        })],
                    )
                    .with_iterations(4)
                    .with_workout_type(domain::WorkoutType::AerobicEnduranceWorkout),
                ],
            ),
            domain::ActivityGroup::new(
                domain::ActivityType::Running,
                domain::Location::Outdoor,
                vec![domain::Workout::new(
                    vec![
                        domain::Exercise::new(
                            domain::Movement::Sprint,
                            domain::Goal::meters(400.0),
                        )
                        .with_alert(domain::Alert::SpeedRange {
                            low: 18.0,
                            high: 22.5,
                            unit: domain::SpeedUnit::KilometersPerHour,
                        }),
                        domain::Exercise::new(domain::Movement::Run, domain::Goal::Open),
                    ],
                    vec![domain::Rest::default()],
                )],
            ),
        ],
    )
    .with_id(1.into())
});

pub static SESSION_2: LazyLock<domain::ActivitySession> = LazyLock::new(|| {
    domain::ActivitySession::single_activity(
        vec![domain::Workout::new(
            vec![
                domain::Exercise::new(domain::Movement::Meditation, domain::Goal::Open),
                domain::Exercise::new(
                    domain::Movement::BreathingExercise,
                    domain::Goal::seconds(90.0),
                ),
            ],
            vec![domain::Rest::new(domain::Goal::seconds(15.0))],
        )],
        domain::ActivityType::MindAndBody,
        domain::Location::Indoor,
        None,
    )
    .with_id(2.into())
    .with_prebuilt(true)
});
