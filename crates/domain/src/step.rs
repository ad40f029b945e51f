use crate::{ActivitySession, ActivityType, Exercise, Rest, Workout};

/// Single work or rest interval of a flattened workout plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlannedStep<'a> {
    Work(&'a Exercise),
    Rest(&'a Rest),
}

impl PlannedStep<'_> {
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            PlannedStep::Work(exercise) => exercise.display_name(),
            PlannedStep::Rest(rest) => &rest.display_name,
        }
    }
}

impl Workout {
    /// Steps of all iterations in execution order.
    ///
    /// Each iteration interleaves every exercise with the rest period of the same index, if
    /// there is one.
    #[must_use]
    pub fn flattened_steps(&self) -> Vec<PlannedStep<'_>> {
        if self.exercises().is_empty() {
            return vec![];
        }

        let pass = self
            .exercises()
            .iter()
            .enumerate()
            .flat_map(|(i, exercise)| {
                std::iter::once(PlannedStep::Work(exercise))
                    .chain(self.rest_periods().get(i).map(PlannedStep::Rest))
            })
            .collect::<Vec<_>>();

        let mut steps = Vec::with_capacity(pass.len() * self.iterations() as usize);
        for _ in 0..self.iterations() {
            steps.extend_from_slice(&pass);
        }
        steps
    }
}

impl ActivitySession {
    /// Steps of all workouts of all groups in declaration order.
    #[must_use]
    pub fn flattened_steps(&self) -> Vec<PlannedStep<'_>> {
        self.workouts().flat_map(Workout::flattened_steps).collect()
    }

    /// Steps of the workouts of all groups with the given activity.
    #[must_use]
    pub fn flattened_steps_for(&self, activity: ActivityType) -> Vec<PlannedStep<'_>> {
        self.activity_groups()
            .iter()
            .filter(|g| g.activity() == activity)
            .flat_map(|g| g.workouts().iter().flat_map(Workout::flattened_steps))
            .collect()
    }
}
