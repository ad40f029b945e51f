use crate::{FitnessMetric, Movement, Muscle};

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Entry {
    pub muscles: &'static [Muscle],
    pub metrics: &'static [FitnessMetric],
}

impl Entry {
    const fn new(muscles: &'static [Muscle], metrics: &'static [FitnessMetric]) -> Self {
        Self { muscles, metrics }
    }
}

/// Muscles and fitness metrics trained by a movement.
///
/// The match is exhaustive, so every movement has exactly one entry.
#[must_use]
pub const fn entry(movement: Movement) -> Entry {
    use FitnessMetric::{
        AerobicEndurance, Agility, AnaerobicEndurance, Endurance, Mobility, MuscularEndurance,
        Power, Speed, Stability, Strength,
    };
    use Muscle::{
        Abductors, Adductors, Back, Biceps, Calves, Chest, Core, FullBody, Glutes, Hamstrings,
        Iliacus, Lats, Obliques, Psoas, Quadriceps, Shoulders, Triceps,
    };

    match movement {
        // Upper body
        Movement::PullUps | Movement::ChinUps => {
            Entry::new(&[Back, Lats, Biceps], &[Strength, Power])
        }
        Movement::LatPulldowns | Movement::CablePullover => {
            Entry::new(&[Back, Lats, Biceps], &[Strength, MuscularEndurance])
        }
        Movement::ChestDips | Movement::BenchPress => {
            Entry::new(&[Chest, Triceps], &[Strength, Power])
        }
        Movement::ChestFlys => Entry::new(&[Chest, Triceps], &[Strength, MuscularEndurance]),
        Movement::TricepDips | Movement::TricepPulldown | Movement::OverheadPull => {
            Entry::new(&[Triceps], &[Strength, MuscularEndurance])
        }
        Movement::BicepCurls | Movement::HammerCurls | Movement::PreacherCurls => {
            Entry::new(&[Biceps], &[Strength, MuscularEndurance])
        }
        Movement::LateralRaises | Movement::OverheadPress | Movement::FacePulls => {
            Entry::new(&[Shoulders], &[Strength, Stability])
        }

        // Lower body
        Movement::BarbellBackSquat => {
            Entry::new(&[Quadriceps, Glutes], &[Strength, Power, Stability])
        }
        Movement::BarbellDeadlifts => {
            Entry::new(&[Hamstrings, Glutes, Back], &[Strength, Power, Stability])
        }
        Movement::CalfRaises => Entry::new(&[Calves], &[Strength, Stability]),
        Movement::Adductors => Entry::new(&[Adductors], &[Stability, Mobility]),
        Movement::Abductors => Entry::new(&[Abductors], &[Stability, Mobility]),

        // Core
        Movement::LSit | Movement::LegRaise => {
            Entry::new(&[Core, Psoas], &[Strength, Stability, MuscularEndurance])
        }

        // Cardio
        Movement::Cycling => Entry::new(&[FullBody], &[AerobicEndurance, MuscularEndurance]),
        Movement::Run => Entry::new(&[FullBody], &[AerobicEndurance, Speed]),
        Movement::Sprint => Entry::new(&[FullBody], &[AnaerobicEndurance, Speed, Power]),
        Movement::JumpRope => Entry::new(&[FullBody], &[AnaerobicEndurance, Agility, Speed]),

        // Stretching
        Movement::BenchHipFlexorStretch => Entry::new(&[Psoas, Iliacus], &[Mobility]),
        Movement::HamstringStretch => Entry::new(&[Hamstrings], &[Mobility]),
        Movement::QuadricepsStretch => Entry::new(&[Quadriceps], &[Mobility]),
        Movement::CalfStretch => Entry::new(&[Calves], &[Mobility]),
        Movement::ShoulderStretch => Entry::new(&[Shoulders], &[Mobility]),
        Movement::NeckStretch => Entry::new(&[FullBody], &[Mobility]),
        Movement::SpinalTwist | Movement::ChildsPose => {
            Entry::new(&[Back, Core], &[Mobility, Stability])
        }

        // Yoga
        Movement::DownwardDog => Entry::new(
            &[Shoulders, Hamstrings, Calves],
            &[Mobility, Stability, Strength],
        ),
        Movement::WarriorOne | Movement::WarriorTwo => {
            Entry::new(&[Quadriceps, Glutes, Core], &[Stability, Strength, Mobility])
        }
        Movement::TrianglePose => {
            Entry::new(&[Hamstrings, Core, Shoulders], &[Mobility, Stability])
        }
        Movement::TreePose | Movement::MountainPose => Entry::new(&[Core, Glutes], &[Stability]),
        Movement::CatCowPose => Entry::new(&[Back, Core], &[Mobility, Stability]),
        Movement::CobraPose => Entry::new(&[Back, Chest], &[Mobility, Strength]),
        Movement::PlankPose => Entry::new(
            &[Core, Shoulders, Chest],
            &[Strength, Stability, MuscularEndurance],
        ),
        Movement::SunSalutation => {
            Entry::new(&[FullBody], &[Mobility, Stability, Strength, Endurance])
        }

        // Pilates
        Movement::PilatesHundred => Entry::new(&[Core, Obliques], &[MuscularEndurance, Stability]),
        Movement::PilatesRollUp => Entry::new(&[Core, Psoas], &[Strength, Stability, Mobility]),
        Movement::PilatesSingleLegCircle => Entry::new(&[Core, Psoas], &[Stability, Mobility]),
        Movement::PilatesTeaser => Entry::new(&[Core, Psoas], &[Strength, Stability]),
        Movement::PilatesPlank => Entry::new(
            &[Core, Shoulders],
            &[Strength, Stability, MuscularEndurance],
        ),
        Movement::PilatesBridge => {
            Entry::new(&[Glutes, Hamstrings, Core], &[Strength, Stability])
        }

        // Mindfulness
        Movement::Meditation
        | Movement::BreathingExercise
        | Movement::BodyScanning
        | Movement::ProgressiveMuscleRelaxation => Entry::new(&[FullBody], &[Stability]),

        // Complex
        Movement::BearCrawls => {
            Entry::new(&[Core, Psoas], &[Strength, Stability, MuscularEndurance])
        }
        Movement::PikePulse => Entry::new(&[Core, Psoas], &[Strength, Stability, Mobility]),
        Movement::HingeToSquat => Entry::new(&[FullBody], &[Mobility, Stability, Strength]),
        Movement::PrecisionBroadJump => Entry::new(&[FullBody], &[Power, Agility, Speed]),
        Movement::RopeClimbing => {
            Entry::new(&[FullBody], &[Strength, Power, MuscularEndurance])
        }
    }
}
