use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::catalog;

/// Aspects of fitness that can be improved by training.
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
)]
pub enum FitnessMetric {
    #[strum(serialize = "Strength")]
    Strength,
    #[strum(serialize = "Stability")]
    Stability,
    #[strum(serialize = "Speed")]
    Speed,
    #[strum(serialize = "Endurance")]
    Endurance,
    #[strum(serialize = "Aerobic Endurance")]
    AerobicEndurance,
    #[strum(serialize = "Anaerobic Endurance")]
    AnaerobicEndurance,
    #[strum(serialize = "Muscular Endurance")]
    MuscularEndurance,
    #[strum(serialize = "Agility")]
    Agility,
    #[strum(serialize = "Power")]
    Power,
    #[strum(serialize = "Mobility")]
    Mobility,
}

#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
)]
pub enum Muscle {
    // Core
    #[strum(serialize = "Core")]
    Core,
    #[strum(serialize = "Obliques")]
    Obliques,
    #[strum(serialize = "Psoas")]
    Psoas,
    #[strum(serialize = "Iliacus")]
    Iliacus,
    // Upper body
    #[strum(serialize = "Chest")]
    Chest,
    #[strum(serialize = "Back")]
    Back,
    #[strum(serialize = "Lats")]
    Lats,
    #[strum(serialize = "Shoulders")]
    Shoulders,
    #[strum(serialize = "Biceps")]
    Biceps,
    #[strum(serialize = "Triceps")]
    Triceps,
    // Lower body
    #[strum(serialize = "Quadriceps")]
    Quadriceps,
    #[strum(serialize = "Hamstrings")]
    Hamstrings,
    #[strum(serialize = "Glutes")]
    Glutes,
    #[strum(serialize = "Calves")]
    Calves,
    #[strum(serialize = "Adductors")]
    Adductors,
    #[strum(serialize = "Abductors")]
    Abductors,
    // Full body
    #[strum(serialize = "Full Body")]
    FullBody,
}

#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
)]
pub enum WorkoutType {
    #[strum(serialize = "Warmup")]
    Warmup,
    #[strum(serialize = "Cooldown")]
    Cooldown,
    #[strum(serialize = "Strength Workout")]
    StrengthWorkout,
    #[strum(serialize = "Endurance Workout")]
    EnduranceWorkout,
    #[strum(serialize = "Stability Workout")]
    StabilityWorkout,
    #[strum(serialize = "Dynamic Warmup")]
    DynamicWarmup,
    #[strum(serialize = "Functional Warmup")]
    FunctionalWarmup,
    #[strum(serialize = "Functional Strength Workout")]
    FunctionalStrengthWorkout,
    #[strum(serialize = "Muscular Endurance Workout")]
    MuscularEnduranceWorkout,
    #[strum(serialize = "Aerobic Endurance Workout")]
    AerobicEnduranceWorkout,
    #[strum(serialize = "Anaerobic Endurance Workout")]
    AnaerobicEnduranceWorkout,
    #[strum(serialize = "Functional Stability Workout")]
    FunctionalStabilityWorkout,
}

/// A physical or mental movement an athlete can perform.
///
/// The muscles and fitness metrics trained by a movement are fixed and looked up in the
/// [`catalog`].
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    IntoStaticStr,
    PartialEq,
    PartialOrd,
    Ord,
)]
pub enum Movement {
    // Upper body
    #[strum(serialize = "Pull Ups")]
    PullUps,
    #[strum(serialize = "Chin Ups")]
    ChinUps,
    #[strum(serialize = "Chest Dips")]
    ChestDips,
    #[strum(serialize = "Tricep Dips")]
    TricepDips,
    #[strum(serialize = "Bench Press")]
    BenchPress,
    #[strum(serialize = "Lat Pulldowns")]
    LatPulldowns,
    #[strum(serialize = "Cable Pullover")]
    CablePullover,
    #[strum(serialize = "Chest Flys")]
    ChestFlys,
    #[strum(serialize = "Bicep Curls")]
    BicepCurls,
    #[strum(serialize = "Hammer Curls")]
    HammerCurls,
    #[strum(serialize = "Preacher Curls")]
    PreacherCurls,
    #[strum(serialize = "Lateral Raises")]
    LateralRaises,
    #[strum(serialize = "Overhead Press")]
    OverheadPress,
    #[strum(serialize = "Face Pulls")]
    FacePulls,
    #[strum(serialize = "Tricep Pulldown")]
    TricepPulldown,
    #[strum(serialize = "Overhead Pull")]
    OverheadPull,
    // Lower body
    #[strum(serialize = "Barbell Back Squat")]
    BarbellBackSquat,
    #[strum(serialize = "Barbell Deadlifts")]
    BarbellDeadlifts,
    #[strum(serialize = "Calf Raises")]
    CalfRaises,
    #[strum(serialize = "Adductors")]
    Adductors,
    #[strum(serialize = "Abductors")]
    Abductors,
    // Core
    #[strum(serialize = "L-Sit")]
    LSit,
    #[strum(serialize = "Leg Raise")]
    LegRaise,
    // Cardio
    #[strum(serialize = "Cycling")]
    Cycling,
    #[strum(serialize = "Run")]
    Run,
    #[strum(serialize = "Sprint")]
    Sprint,
    #[strum(serialize = "Jump Rope")]
    JumpRope,
    // Stretching
    #[strum(serialize = "Bench Hip Flexor Stretch")]
    BenchHipFlexorStretch,
    #[strum(serialize = "Hamstring Stretch")]
    HamstringStretch,
    #[strum(serialize = "Quadriceps Stretch")]
    QuadricepsStretch,
    #[strum(serialize = "Calf Stretch")]
    CalfStretch,
    #[strum(serialize = "Shoulder Stretch")]
    ShoulderStretch,
    #[strum(serialize = "Neck Stretch")]
    NeckStretch,
    #[strum(serialize = "Spinal Twist")]
    SpinalTwist,
    #[strum(serialize = "Child's Pose")]
    ChildsPose,
    // Yoga
    #[strum(serialize = "Downward Dog")]
    DownwardDog,
    #[strum(serialize = "Warrior I")]
    WarriorOne,
    #[strum(serialize = "Warrior II")]
    WarriorTwo,
    #[strum(serialize = "Triangle Pose")]
    TrianglePose,
    #[strum(serialize = "Tree Pose")]
    TreePose,
    #[strum(serialize = "Cat Cow Pose")]
    CatCowPose,
    #[strum(serialize = "Cobra Pose")]
    CobraPose,
    #[strum(serialize = "Plank Pose")]
    PlankPose,
    #[strum(serialize = "Mountain Pose")]
    MountainPose,
    #[strum(serialize = "Sun Salutation")]
    SunSalutation,
    // Pilates
    #[strum(serialize = "Pilates Hundred")]
    PilatesHundred,
    #[strum(serialize = "Pilates Roll Up")]
    PilatesRollUp,
    #[strum(serialize = "Pilates Single Leg Circle")]
    PilatesSingleLegCircle,
    #[strum(serialize = "Pilates Teaser")]
    PilatesTeaser,
    #[strum(serialize = "Pilates Plank")]
    PilatesPlank,
    #[strum(serialize = "Pilates Bridge")]
    PilatesBridge,
    // Mindfulness
    #[strum(serialize = "Meditation")]
    Meditation,
    #[strum(serialize = "Breathing Exercise")]
    BreathingExercise,
    #[strum(serialize = "Body Scanning")]
    BodyScanning,
    #[strum(serialize = "Progressive Muscle Relaxation")]
    ProgressiveMuscleRelaxation,
    // Complex
    #[strum(serialize = "Bear Crawls")]
    BearCrawls,
    #[strum(serialize = "Hinge to Squat")]
    HingeToSquat,
    #[strum(serialize = "Pike Pulse")]
    PikePulse,
    #[strum(serialize = "Precision Broad Jump")]
    PrecisionBroadJump,
    #[strum(serialize = "Rope Climbing")]
    RopeClimbing,
}

impl Movement {
    #[must_use]
    pub fn target_muscles(self) -> &'static [Muscle] {
        catalog::entry(self).muscles
    }

    #[must_use]
    pub fn target_metrics(self) -> &'static [FitnessMetric] {
        catalog::entry(self).metrics
    }
}
