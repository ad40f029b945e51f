use std::fmt::{self, Display};

use chrono::Duration;
use strum::{AsRefStr, EnumIter, EnumString};

#[derive(AsRefStr, Clone, Copy, Debug, EnumIter, EnumString, Eq, Hash, PartialEq)]
pub enum TimeUnit {
    #[strum(serialize = "s")]
    Seconds,
    #[strum(serialize = "min")]
    Minutes,
    #[strum(serialize = "h")]
    Hours,
}

impl TimeUnit {
    #[must_use]
    pub fn seconds(self, value: f64) -> f64 {
        match self {
            TimeUnit::Seconds => value,
            TimeUnit::Minutes => value * 60.0,
            TimeUnit::Hours => value * 3600.0,
        }
    }
}

#[derive(AsRefStr, Clone, Copy, Debug, EnumIter, EnumString, Eq, Hash, PartialEq)]
pub enum LengthUnit {
    #[strum(serialize = "m")]
    Meters,
    #[strum(serialize = "km")]
    Kilometers,
    #[strum(serialize = "mi")]
    Miles,
    #[strum(serialize = "yd")]
    Yards,
    #[strum(serialize = "ft")]
    Feet,
}

impl LengthUnit {
    #[must_use]
    pub fn meters(self, value: f64) -> f64 {
        match self {
            LengthUnit::Meters => value,
            LengthUnit::Kilometers => value * 1000.0,
            LengthUnit::Miles => value * 1609.344,
            LengthUnit::Yards => value * 0.9144,
            LengthUnit::Feet => value * 0.3048,
        }
    }
}

#[derive(AsRefStr, Clone, Copy, Debug, EnumIter, EnumString, Eq, Hash, PartialEq)]
pub enum SpeedUnit {
    #[strum(serialize = "km/h")]
    KilometersPerHour,
    #[strum(serialize = "mph")]
    MilesPerHour,
    #[strum(serialize = "m/s")]
    MetersPerSecond,
}

/// Target of an exercise or rest period.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Goal {
    /// Duration of `value` expressed in `unit`.
    Time {
        value: f64,
        unit: TimeUnit,
    },
    /// Distance of `value` expressed in `unit`.
    Distance {
        value: f64,
        unit: LengthUnit,
    },
    #[default]
    Open,
}

impl Goal {
    #[must_use]
    pub fn seconds(value: f64) -> Self {
        Goal::Time {
            value,
            unit: TimeUnit::Seconds,
        }
    }

    #[must_use]
    pub fn meters(value: f64) -> Self {
        Goal::Distance {
            value,
            unit: LengthUnit::Meters,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Goal::Time { value, unit } => Some(seconds_to_duration(unit.seconds(*value))),
            Goal::Distance { .. } | Goal::Open => None,
        }
    }

    #[must_use]
    pub fn distance_in_meters(&self) -> Option<f64> {
        match self {
            Goal::Distance { value, unit } => Some(unit.meters(*value)),
            Goal::Time { .. } | Goal::Open => None,
        }
    }
}

/// Formats time goals as `MM:SS`, distance goals with one decimal and their unit symbol.
impl Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Goal::Time { value, unit } => {
                #[allow(clippy::cast_possible_truncation)]
                let total = unit.seconds(*value) as i64;
                write!(f, "{:02}:{:02}", total / 60, total % 60)
            }
            Goal::Distance { value, unit } => write!(f, "{value:.1} {}", unit.as_ref()),
            Goal::Open => write!(f, "Open"),
        }
    }
}

/// Performance alert attached to an exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alert {
    HeartRateRange { low: f64, high: f64 },
    HeartRateZone(u8),
    PowerRange { low: f64, high: f64 },
    PowerThreshold(f64),
    PowerZone(u8),
    CadenceRange { low: f64, high: f64 },
    CadenceThreshold(f64),
    SpeedRange { low: f64, high: f64, unit: SpeedUnit },
    SpeedThreshold { value: f64, unit: SpeedUnit },
}

impl Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Alert::HeartRateRange { low, high } => {
                write!(f, "HR {}-{} BPM", low.trunc(), high.trunc())
            }
            Alert::HeartRateZone(zone) => write!(f, "HR Zone {zone}"),
            Alert::PowerRange { low, high } => {
                write!(f, "Power {}-{} W", low.trunc(), high.trunc())
            }
            Alert::PowerThreshold(value) => write!(f, "Power {} W", value.trunc()),
            Alert::PowerZone(zone) => write!(f, "Power Zone {zone}"),
            Alert::CadenceRange { low, high } => {
                write!(f, "Cadence {}-{} RPM", low.trunc(), high.trunc())
            }
            Alert::CadenceThreshold(value) => write!(f, "Cadence {} RPM", value.trunc()),
            Alert::SpeedRange { low, high, unit } => {
                write!(f, "Speed {low:.1}-{high:.1} {}", unit.as_ref())
            }
            Alert::SpeedThreshold { value, unit } => {
                write!(f, "Speed {value:.1} {}", unit.as_ref())
            }
        }
    }
}

/// Saturates at `Duration::MIN` and `Duration::MAX`. NaN is mapped to zero.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn seconds_to_duration(seconds: f64) -> Duration {
    if seconds.is_nan() {
        return Duration::zero();
    }
    let milliseconds = (seconds * 1000.0).round() as i64;
    Duration::try_milliseconds(milliseconds).unwrap_or(if milliseconds < 0 {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Goal::seconds(30.0), "00:30")]
    #[case(Goal::seconds(300.0), "05:00")]
    #[case(Goal::seconds(89.9), "01:29")]
    #[case(Goal::Time { value: 2.0, unit: TimeUnit::Hours }, "120:00")]
    #[case(Goal::Distance { value: 5.0, unit: LengthUnit::Kilometers }, "5.0 km")]
    #[case(Goal::meters(400.0), "400.0 m")]
    #[case(Goal::Open, "Open")]
    fn test_goal_display(#[case] goal: Goal, #[case] expected: &str) {
        assert_eq!(goal.to_string(), expected);
    }

    #[rstest]
    #[case(Goal::seconds(30.0), Some(Duration::seconds(30)))]
    #[case(Goal::Time { value: 1.5, unit: TimeUnit::Minutes }, Some(Duration::seconds(90)))]
    #[case(Goal::meters(100.0), None)]
    #[case(Goal::Open, None)]
    fn test_goal_duration(#[case] goal: Goal, #[case] expected: Option<Duration>) {
        assert_eq!(goal.duration(), expected);
    }

    #[test]
    fn test_goal_distance_in_meters() {
        assert_eq!(
            Goal::Distance {
                value: 2.0,
                unit: LengthUnit::Kilometers
            }
            .distance_in_meters(),
            Some(2000.0)
        );
        assert_eq!(Goal::seconds(10.0).distance_in_meters(), None);
    }

    #[rstest]
    #[case(1.5, Duration::milliseconds(1500))]
    #[case(-2.0, Duration::seconds(-2))]
    #[case(1e30, Duration::MAX)]
    #[case(-1e30, Duration::MIN)]
    #[case(f64::INFINITY, Duration::MAX)]
    #[case(f64::NAN, Duration::zero())]
    fn test_seconds_to_duration(#[case] seconds: f64, #[case] expected: Duration) {
        assert_eq!(seconds_to_duration(seconds), expected);
    }

    #[test]
    fn test_goal_default() {
        assert_eq!(Goal::default(), Goal::Open);
    }

    #[rstest]
    #[case(Alert::HeartRateRange { low: 120.0, high: 150.9 }, "HR 120-150 BPM")]
    #[case(Alert::HeartRateZone(2), "HR Zone 2")]
    #[case(Alert::PowerRange { low: 200.0, high: 250.0 }, "Power 200-250 W")]
    #[case(Alert::PowerThreshold(250.0), "Power 250 W")]
    #[case(Alert::PowerZone(3), "Power Zone 3")]
    #[case(Alert::CadenceRange { low: 80.0, high: 95.0 }, "Cadence 80-95 RPM")]
    #[case(Alert::CadenceThreshold(90.0), "Cadence 90 RPM")]
    #[case(
        Alert::SpeedRange { low: 9.5, high: 10.5, unit: SpeedUnit::KilometersPerHour },
        "Speed 9.5-10.5 km/h"
    )]
    #[case(
        Alert::SpeedThreshold { value: 10.0, unit: SpeedUnit::KilometersPerHour },
        "Speed 10.0 km/h"
    )]
    fn test_alert_display(#[case] alert: Alert, #[case] expected: &str) {
        assert_eq!(alert.to_string(), expected);
    }
}
