//! JSON representation of session catalogs.
//!
//! Enumerations are stored by their display names. Target muscles and metrics are derived from
//! the movements and therefore not stored.

use std::str::FromStr;

use log::debug;
use repset_domain as domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error("unknown {kind} \"{value}\"")]
    UnknownTag { kind: &'static str, value: String },
}

pub fn to_json(sessions: &[domain::ActivitySession]) -> Result<String, SnapshotError> {
    let sessions = sessions.iter().map(Session::from).collect::<Vec<_>>();
    Ok(serde_json::to_string_pretty(&sessions)?)
}

pub fn from_json(json: &str) -> Result<Vec<domain::ActivitySession>, SnapshotError> {
    let sessions = serde_json::from_str::<Vec<Session>>(json)?;
    debug!("loaded {} sessions from snapshot", sessions.len());
    sessions
        .into_iter()
        .map(domain::ActivitySession::try_from)
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub prebuilt: bool,
    pub groups: Vec<Group>,
}

impl From<&domain::ActivitySession> for Session {
    fn from(value: &domain::ActivitySession) -> Self {
        Self {
            id: *value.id(),
            name: value.name().to_string(),
            prebuilt: value.is_prebuilt(),
            groups: value.activity_groups().iter().map(Group::from).collect(),
        }
    }
}

impl TryFrom<Session> for domain::ActivitySession {
    type Error = SnapshotError;

    fn try_from(value: Session) -> Result<Self, Self::Error> {
        Ok(domain::ActivitySession::new(
            domain::Name::new(&value.name)?,
            value
                .groups
                .into_iter()
                .map(domain::ActivityGroup::try_from)
                .collect::<Result<_, _>>()?,
        )
        .with_id(value.id.into())
        .with_prebuilt(value.prebuilt))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Group {
    pub activity: String,
    pub location: String,
    pub workouts: Vec<Workout>,
}

impl From<&domain::ActivityGroup> for Group {
    fn from(value: &domain::ActivityGroup) -> Self {
        Self {
            activity: value.activity().to_string(),
            location: value.location().to_string(),
            workouts: value.workouts().iter().map(Workout::from).collect(),
        }
    }
}

impl TryFrom<Group> for domain::ActivityGroup {
    type Error = SnapshotError;

    fn try_from(value: Group) -> Result<Self, Self::Error> {
        Ok(domain::ActivityGroup::new(
            parse("activity", &value.activity)?,
            parse("location", &value.location)?,
            value
                .workouts
                .into_iter()
                .map(domain::Workout::try_from)
                .collect::<Result<_, _>>()?,
        ))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub exercises: Vec<Exercise>,
    pub rest_periods: Vec<Rest>,
    pub iterations: u32,
    pub workout_type: Option<String>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            exercises: value.exercises().iter().map(Exercise::from).collect(),
            rest_periods: value.rest_periods().iter().map(Rest::from).collect(),
            iterations: value.iterations(),
            workout_type: value.workout_type().map(|t| t.to_string()),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = SnapshotError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        let workout = domain::Workout::new(
            value
                .exercises
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<_, _>>()?,
            value
                .rest_periods
                .into_iter()
                .map(domain::Rest::try_from)
                .collect::<Result<_, _>>()?,
        )
        .with_iterations(i64::from(value.iterations));
        Ok(match value.workout_type {
            Some(workout_type) => workout.with_workout_type(parse("workout type", &workout_type)?),
            None => workout,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub movement: String,
    pub goal: Goal,
    pub alert: Option<Alert>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            movement: value.movement().to_string(),
            goal: Goal::from(*value.goal()),
            alert: value.alert().copied().map(Alert::from),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = SnapshotError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        let exercise = domain::Exercise::new(
            parse("movement", &value.movement)?,
            domain::Goal::try_from(value.goal)?,
        );
        Ok(match value.alert {
            Some(alert) => exercise.with_alert(domain::Alert::try_from(alert)?),
            None => exercise,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rest {
    pub name: String,
    pub goal: Goal,
}

impl From<&domain::Rest> for Rest {
    fn from(value: &domain::Rest) -> Self {
        Self {
            name: value.display_name.clone(),
            goal: Goal::from(value.goal),
        }
    }
}

impl TryFrom<Rest> for domain::Rest {
    type Error = SnapshotError;

    fn try_from(value: Rest) -> Result<Self, Self::Error> {
        Ok(domain::Rest {
            display_name: value.name,
            goal: domain::Goal::try_from(value.goal)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Goal {
    Time { value: f64, unit: String },
    Distance { value: f64, unit: String },
    Open,
}

impl From<domain::Goal> for Goal {
    fn from(value: domain::Goal) -> Self {
        match value {
            domain::Goal::Time { value, unit } => Goal::Time {
                value,
                unit: unit.as_ref().to_string(),
            },
            domain::Goal::Distance { value, unit } => Goal::Distance {
                value,
                unit: unit.as_ref().to_string(),
            },
            domain::Goal::Open => Goal::Open,
        }
    }
}

impl TryFrom<Goal> for domain::Goal {
    type Error = SnapshotError;

    fn try_from(value: Goal) -> Result<Self, Self::Error> {
        Ok(match value {
            Goal::Time { value, unit } => domain::Goal::Time {
                value,
                unit: parse("time unit", &unit)?,
            },
            Goal::Distance { value, unit } => domain::Goal::Distance {
                value,
                unit: parse("length unit", &unit)?,
            },
            Goal::Open => domain::Goal::Open,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Alert {
    HeartRateRange { low: f64, high: f64 },
    HeartRateZone { zone: u8 },
    PowerRange { low: f64, high: f64 },
    PowerThreshold { value: f64 },
    PowerZone { zone: u8 },
    CadenceRange { low: f64, high: f64 },
    CadenceThreshold { value: f64 },
    SpeedRange { low: f64, high: f64, unit: String },
    SpeedThreshold { value: f64, unit: String },
}

impl From<domain::Alert> for Alert {
    fn from(value: domain::Alert) -> Self {
        match value {
            domain::Alert::HeartRateRange { low, high } => Alert::HeartRateRange { low, high },
            domain::Alert::HeartRateZone(zone) => Alert::HeartRateZone { zone },
            domain::Alert::PowerRange { low, high } => Alert::PowerRange { low, high },
            domain::Alert::PowerThreshold(value) => Alert::PowerThreshold { value },
            domain::Alert::PowerZone(zone) => Alert::PowerZone { zone },
            domain::Alert::CadenceRange { low, high } => Alert::CadenceRange { low, high },
            domain::Alert::CadenceThreshold(value) => Alert::CadenceThreshold { value },
            domain::Alert::SpeedRange { low, high, unit } => Alert::SpeedRange {
                low,
                high,
                unit: unit.as_ref().to_string(),
            },
            domain::Alert::SpeedThreshold { value, unit } => Alert::SpeedThreshold {
                value,
                unit: unit.as_ref().to_string(),
            },
        }
    }
}

impl TryFrom<Alert> for domain::Alert {
    type Error = SnapshotError;

    fn try_from(value: Alert) -> Result<Self, Self::Error> {
        Ok(match value {
            Alert::HeartRateRange { low, high } => domain::Alert::HeartRateRange { low, high },
            Alert::HeartRateZone { zone } => domain::Alert::HeartRateZone(zone),
            Alert::PowerRange { low, high } => domain::Alert::PowerRange { low, high },
            Alert::PowerThreshold { value } => domain::Alert::PowerThreshold(value),
            Alert::PowerZone { zone } => domain::Alert::PowerZone(zone),
            Alert::CadenceRange { low, high } => domain::Alert::CadenceRange { low, high },
            Alert::CadenceThreshold { value } => domain::Alert::CadenceThreshold(value),
            Alert::SpeedRange { low, high, unit } => domain::Alert::SpeedRange {
                low,
                high,
                unit: parse("speed unit", &unit)?,
            },
            Alert::SpeedThreshold { value, unit } => domain::Alert::SpeedThreshold {
                value,
                unit: parse("speed unit", &unit)?,
            },
        })
    }
}

fn parse<T: FromStr>(kind: &'static str, value: &str) -> Result<T, SnapshotError> {
    T::from_str(value).map_err(|_| SnapshotError::UnknownTag {
        kind,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{SESSION, SESSION_2, SESSIONS};

    use super::*;

    #[test]
    fn test_session_try_from() {
        assert_eq!(
            domain::ActivitySession::try_from(Session::from(&*SESSION)).unwrap(),
            SESSION.clone()
        );
        assert_eq!(
            domain::ActivitySession::try_from(Session::from(&*SESSION_2)).unwrap(),
            SESSION_2.clone()
        );
    }

    #[test]
    fn test_session_serialize() {
        assert_eq!(
            json!(Session::from(&*SESSION_2)),
            json!({
                "id": "00000000-0000-0000-0000-000000000002",
                "name": "Mind and Body",
                "prebuilt": true,
                "groups": [{
                    "activity": "Mind and Body",
                    "location": "Indoor",
                    "workouts": [{
                        "exercises": [
                            {"movement": "Meditation", "goal": {"kind": "open"}, "alert": null},
                            {
                                "movement": "Breathing Exercise",
                                "goal": {"kind": "time", "value": 90.0, "unit": "s"},
                                "alert": null
                            }
                        ],
                        "rest_periods": [
                            {"name": "Rest", "goal": {"kind": "time", "value": 15.0, "unit": "s"}}
                        ],
                        "iterations": 1,
                        "workout_type": null
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_alert_serialize() {
        assert_eq!(
            json!(Alert::from(domain::Alert::SpeedThreshold {
                value: 10.0,
                unit: domain::SpeedUnit::KilometersPerHour
            })),
            json!({"kind": "speed_threshold", "value": 10.0, "unit": "km/h"})
        );
        assert_eq!(
            json!(Alert::from(domain::Alert::HeartRateZone(2))),
            json!({"kind": "heart_rate_zone", "zone": 2})
        );
    }

    #[test]
    fn test_from_json() {
        let json = to_json(&SESSIONS).unwrap();
        assert_eq!(from_json(&json).unwrap(), *SESSIONS);
    }

    #[test]
    fn test_from_json_recomputes_targets() {
        let sessions = from_json(&to_json(&SESSIONS).unwrap()).unwrap();
        assert_eq!(sessions[0].target_muscles(), SESSION.target_muscles());
        assert_eq!(sessions[1].target_metrics(), SESSION_2.target_metrics());
        assert_eq!(sessions[0].estimated_duration(), SESSION.estimated_duration());
    }

    #[test]
    fn test_from_json_huge_goal_estimate() {
        let sessions = from_json(
            &json!([{
                "id": "00000000-0000-0000-0000-000000000004",
                "name": "Endless",
                "groups": [{
                    "activity": "Running",
                    "location": "Outdoor",
                    "workouts": [{
                        "exercises": [{
                            "movement": "Run",
                            "goal": {"kind": "time", "value": 1e9, "unit": "h"},
                            "alert": null
                        }],
                        "rest_periods": [],
                        "iterations": 4000,
                        "workout_type": null
                    }]
                }]
            }])
            .to_string(),
        )
        .unwrap();
        let completed = domain::CompletedActivity {
            activity: domain::ActivityType::Running,
            duration: chrono::Duration::seconds(3600),
        };
        assert_eq!(
            domain::find_matching_session(&completed, &sessions).map(|s| s.name().to_string()),
            Some("Endless".to_string())
        );
    }

    #[test]
    fn test_from_json_default_prebuilt() {
        let sessions = from_json(
            r#"[{"id": "00000000-0000-0000-0000-000000000003", "name": "Empty", "groups": []}]"#,
        )
        .unwrap();
        assert_eq!(sessions[0].name().as_str(), "Empty");
        assert!(!sessions[0].is_prebuilt());
    }

    #[rstest]
    #[case::movement(
        json!({"movement": "Burpee", "goal": {"kind": "open"}, "alert": null}),
        "unknown movement \"Burpee\""
    )]
    #[case::time_unit(
        json!({
            "movement": "Run",
            "goal": {"kind": "time", "value": 1.0, "unit": "d"},
            "alert": null
        }),
        "unknown time unit \"d\""
    )]
    #[case::speed_unit(
        json!({
            "movement": "Run",
            "goal": {"kind": "open"},
            "alert": {"kind": "speed_threshold", "value": 10.0, "unit": "knots"}
        }),
        "unknown speed unit \"knots\""
    )]
    fn test_exercise_try_from_unknown_tag(
        #[case] value: serde_json::Value,
        #[case] expected: &str,
    ) {
        let exercise: Exercise = serde_json::from_value(value).unwrap();
        assert_eq!(
            domain::Exercise::try_from(exercise).unwrap_err().to_string(),
            expected
        );
    }

    #[test]
    fn test_from_json_invalid_name() {
        let json = r#"[{"id": "00000000-0000-0000-0000-000000000003", "name": " ", "groups": []}]"#;
        assert!(matches!(
            from_json(json),
            Err(SnapshotError::Name(domain::NameError::Empty))
        ));
    }

    #[test]
    fn test_from_json_invalid_json() {
        assert!(matches!(from_json("{"), Err(SnapshotError::Json(_))));
    }
}
