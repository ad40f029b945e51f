//! Plain text descriptions of workouts and sessions.

use std::fmt::{self, Display};

use crate::{ActivitySession, Goal, Workout};

impl Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.workout_type() {
            Some(workout_type) => writeln!(f, "{workout_type}")?,
            None => writeln!(f, "Workout")?,
        }

        if self.iterations() > 1 {
            writeln!(f, "   Sets: {}", self.iterations())?;
        }
        if !self.target_metrics().is_empty() {
            writeln!(f, "   Target Metrics: {}", join(self.target_metrics()))?;
        }
        if !self.target_muscles().is_empty() {
            writeln!(f, "   Target Muscles: {}", join(self.target_muscles()))?;
        }

        writeln!(f, "   Exercises:")?;
        for (index, exercise) in self.exercises().iter().enumerate() {
            write!(f, "     • {} - Goal: {}", exercise.display_name(), exercise.goal())?;
            if let Some(alert) = exercise.alert() {
                write!(f, " - Alert: {alert}")?;
            }
            writeln!(f)?;

            if let Some(rest) = self.rest_periods().get(index) {
                write!(f, "       Rest: {}", rest.display_name)?;
                match rest.goal {
                    Goal::Time { .. } | Goal::Open => write!(f, " ({})", rest.goal)?,
                    Goal::Distance { .. } => {}
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

impl Display for ActivitySession {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== {} ===", self.name().as_str().to_uppercase())?;
        writeln!(f)?;

        if !self.target_metrics().is_empty() {
            writeln!(f, "Target Metrics: {}", join(self.target_metrics()))?;
        }
        if !self.target_muscles().is_empty() {
            writeln!(f, "Target Muscles: {}", join(self.target_muscles()))?;
        }

        writeln!(f)?;
        writeln!(f, "ACTIVITY GROUPS")?;
        writeln!(f, "---------------")?;

        for (group_index, group) in self.activity_groups().iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{} ({})", group.activity(), group.location())?;
            writeln!(f, "Target Metrics: {}", join(group.target_metrics()))?;
            writeln!(f, "Target Muscles: {}", join(group.target_muscles()))?;
            writeln!(f)?;

            for (workout_index, workout) in group.workouts().iter().enumerate() {
                writeln!(f, "{}.{}. {workout}", group_index + 1, workout_index + 1)?;
            }
        }

        Ok(())
    }
}

fn join<'a, T: AsRef<str> + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    items
        .into_iter()
        .map(|item| -> &str { item.as_ref() })
        .collect::<Vec<_>>()
        .join(", ")
}
