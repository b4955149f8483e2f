use super::activity::Activity;
use super::category::Category;

/// Calorie totals over a set of activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalorieSummary {
    /// Calories eaten (food entries).
    pub consumed: u64,
    /// Calories spent (exercise entries).
    pub burned: u64,
}

impl CalorieSummary {
    /// Sums food and exercise calories separately.
    pub fn from_activities(activities: &[Activity]) -> Self {
        activities
            .iter()
            .fold(Self::default(), |mut acc, activity| {
                let calories = u64::from(activity.calories);
                match activity.category {
                    Category::Food => acc.consumed += calories,
                    Category::Exercise => acc.burned += calories,
                }
                acc
            })
    }

    /// Consumed minus burned; negative when more was burned than eaten.
    pub fn net(&self) -> i64 {
        self.consumed as i64 - self.burned as i64
    }
}
