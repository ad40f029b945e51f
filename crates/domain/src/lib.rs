#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod defaults;
mod description;
mod error;
mod estimate;
mod exercise;
mod goal;
mod interval;
mod matcher;
mod movement;
mod name;
mod service;
mod session;
mod session_catalog;
mod step;
mod workout;

pub use defaults::{default_activity_sessions, default_mind_and_body_sessions, default_sessions};
pub use error::{CreateError, DeleteError, ReadError, StorageError};
pub use exercise::{Exercise, Rest};
pub use goal::{Alert, Goal, LengthUnit, SpeedUnit, TimeUnit};
pub use interval::{ActivityMetrics, IntervalMapping};
pub use matcher::{
    CompletedActivity, MatchSettings, find_matching_session, find_matching_session_with,
};
pub use movement::{FitnessMetric, Movement, Muscle, WorkoutType};
pub use name::{Name, NameError};
pub use service::Service;
pub use session::{
    ActivityGroup, ActivitySession, ActivitySessionRepository, ActivitySessionService,
    ActivityType, Location, SessionID,
};
pub use session_catalog::SessionCatalog;
pub use step::PlannedStep;
pub use workout::Workout;
