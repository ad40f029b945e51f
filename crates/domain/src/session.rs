use std::collections::BTreeSet;

use derive_more::Deref;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, FitnessMetric, Muscle, Name, ReadError, SessionCatalog, Workout,
};

#[allow(async_fn_in_trait)]
pub trait ActivitySessionService {
    async fn get_sessions(&self) -> Result<Vec<ActivitySession>, ReadError>;
    /// Reads all sessions, adds any missing built-in session and categorises the result.
    async fn load_sessions(&self) -> Result<SessionCatalog, ReadError>;
    async fn add_session(&self, session: ActivitySession) -> Result<ActivitySession, CreateError>;
    async fn delete_session(&self, name: &Name) -> Result<Name, DeleteError>;
}

/// Persistent store of activity sessions, identified by their names.
#[allow(async_fn_in_trait)]
pub trait ActivitySessionRepository {
    /// Sessions ordered by creation date, newest first.
    async fn read_sessions(&self) -> Result<Vec<ActivitySession>, ReadError>;
    async fn create_session(
        &self,
        session: ActivitySession,
    ) -> Result<ActivitySession, CreateError>;
    async fn delete_session(&self, name: &Name) -> Result<Name, DeleteError>;
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
pub enum ActivityType {
    #[strum(serialize = "Traditional Strength Training")]
    TraditionalStrengthTraining,
    #[strum(serialize = "Functional Strength Training")]
    FunctionalStrengthTraining,
    #[strum(serialize = "Cycling")]
    Cycling,
    #[strum(serialize = "Running")]
    Running,
    #[strum(serialize = "Walking")]
    Walking,
    #[strum(serialize = "Jump Rope")]
    JumpRope,
    #[strum(serialize = "High Intensity Interval Training")]
    HighIntensityIntervalTraining,
    #[strum(serialize = "Yoga")]
    Yoga,
    #[strum(serialize = "Pilates")]
    Pilates,
    #[strum(serialize = "Flexibility")]
    Flexibility,
    #[strum(serialize = "Mind and Body")]
    MindAndBody,
    #[strum(serialize = "Other")]
    Other,
}

impl ActivityType {
    #[must_use]
    pub fn is_mind_and_body(self) -> bool {
        matches!(
            self,
            ActivityType::Yoga
                | ActivityType::Pilates
                | ActivityType::Flexibility
                | ActivityType::MindAndBody
        )
    }
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
pub enum Location {
    #[strum(serialize = "Indoor")]
    Indoor,
    #[strum(serialize = "Outdoor")]
    Outdoor,
    #[strum(serialize = "Unknown")]
    Unknown,
}

/// Workouts sharing the same activity type and location.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityGroup {
    activity: ActivityType,
    location: Location,
    workouts: Vec<Workout>,
    target_muscles: BTreeSet<Muscle>,
    target_metrics: BTreeSet<FitnessMetric>,
}

impl ActivityGroup {
    #[must_use]
    pub fn new(activity: ActivityType, location: Location, workouts: Vec<Workout>) -> Self {
        let target_muscles = workouts
            .iter()
            .flat_map(|w| w.target_muscles().iter().copied())
            .collect();
        let target_metrics = workouts
            .iter()
            .flat_map(|w| w.target_metrics().iter().copied())
            .collect();
        Self {
            activity,
            location,
            workouts,
            target_muscles,
            target_metrics,
        }
    }

    #[must_use]
    pub fn activity(&self) -> ActivityType {
        self.activity
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
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

/// Complete training session consisting of one or more activity groups.
///
/// Sessions are immutable. An update is modelled by deleting the session and creating a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySession {
    id: SessionID,
    name: Name,
    activity_groups: Vec<ActivityGroup>,
    prebuilt: bool,
    target_muscles: BTreeSet<Muscle>,
    target_metrics: BTreeSet<FitnessMetric>,
}

impl ActivitySession {
    #[must_use]
    pub fn new(name: Name, activity_groups: Vec<ActivityGroup>) -> Self {
        let target_muscles = activity_groups
            .iter()
            .flat_map(|g| g.target_muscles().iter().copied())
            .collect();
        let target_metrics = activity_groups
            .iter()
            .flat_map(|g| g.target_metrics().iter().copied())
            .collect();
        Self {
            id: SessionID::random(),
            name,
            activity_groups,
            prebuilt: false,
            target_muscles,
            target_metrics,
        }
    }

    /// Creates a session with a single activity group, named after the activity if no name is
    /// given.
    #[must_use]
    pub fn single_activity(
        workouts: Vec<Workout>,
        activity: ActivityType,
        location: Location,
        name: Option<Name>,
    ) -> Self {
        Self::new(
            name.unwrap_or_else(|| Name::from(activity)),
            vec![ActivityGroup::new(activity, location, workouts)],
        )
    }

    #[must_use]
    pub fn with_id(self, id: SessionID) -> Self {
        Self { id, ..self }
    }

    #[must_use]
    pub fn with_prebuilt(self, prebuilt: bool) -> Self {
        Self { prebuilt, ..self }
    }

    #[must_use]
    pub fn id(&self) -> SessionID {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub fn activity_groups(&self) -> &[ActivityGroup] {
        &self.activity_groups
    }

    #[must_use]
    pub fn is_prebuilt(&self) -> bool {
        self.prebuilt
    }

    pub fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.activity_groups.iter().flat_map(ActivityGroup::workouts)
    }

    /// Activity of the first group.
    #[must_use]
    pub fn activity(&self) -> ActivityType {
        self.activity_groups
            .first()
            .map_or(ActivityType::Other, ActivityGroup::activity)
    }

    /// Location of the first group.
    #[must_use]
    pub fn location(&self) -> Location {
        self.activity_groups
            .first()
            .map_or(Location::Unknown, ActivityGroup::location)
    }

    #[must_use]
    pub fn contains_activity(&self, activity: ActivityType) -> bool {
        self.activity_groups.iter().any(|g| g.activity == activity)
    }

    /// True if every group is a yoga, pilates, flexibility or mind and body activity.
    #[must_use]
    pub fn is_mind_and_body(&self) -> bool {
        self.activity_groups
            .iter()
            .all(|g| g.activity.is_mind_and_body())
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

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionID(Uuid);

impl SessionID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
