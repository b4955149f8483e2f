//! In-memory activity list and the actions that change it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::activity::{Activity, ActivityId};

/// A tagged message describing a change to the activity list.
///
/// Serializes as `{"kind": "...", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "kebab-case")]
pub enum ActivityAction {
    /// Insert the activity, or replace the one with the same id.
    #[serde(rename_all = "camelCase")]
    SaveActivity { new_activity: Activity },
    /// Designate an existing activity for editing.
    SetActiveId { id: ActivityId },
    /// Remove the activity with the given id.
    DeleteActivity { id: ActivityId },
    /// Clear every activity.
    RestartApp,
}

/// Which branch an [`ActivityState::upsert`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

/// The ordered activity list plus the record currently selected for editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityState {
    activities: Vec<Activity>,
    active_id: Option<ActivityId>,
}

impl ActivityState {
    /// Creates an empty state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all activities in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Returns the identifier of the activity being edited, if any.
    pub fn active_id(&self) -> Option<ActivityId> {
        self.active_id
    }

    /// Looks up an activity by identity.
    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Replaces the activity with the same id in place, or appends it.
    pub fn upsert(&mut self, record: Activity) -> Upsert {
        match self.activities.iter_mut().find(|a| a.id == record.id) {
            Some(existing) => {
                *existing = record;
                Upsert::Replaced
            }
            None => {
                self.activities.push(record);
                Upsert::Inserted
            }
        }
    }

    /// Applies an action to the state.
    pub fn dispatch(&mut self, action: ActivityAction) {
        match action {
            ActivityAction::SaveActivity { new_activity } => {
                let id = new_activity.id;
                let outcome = self.upsert(new_activity);
                debug!(%id, ?outcome, "saved activity");
                self.active_id = None;
            }
            ActivityAction::SetActiveId { id } => {
                debug!(%id, "activity selected for editing");
                self.active_id = Some(id);
            }
            ActivityAction::DeleteActivity { id } => {
                self.activities.retain(|a| a.id != id);
                if self.active_id == Some(id) {
                    self.active_id = None;
                }
                debug!(%id, "deleted activity");
            }
            ActivityAction::RestartApp => {
                debug!(count = self.activities.len(), "cleared all activities");
                self.activities.clear();
                self.active_id = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::model::Category;

    fn activity(name: &str, category: Category, calories: u32) -> Activity {
        Activity {
            id: ActivityId::new(),
            category,
            name: name.to_string(),
            calories,
        }
    }

    fn save(activity: Activity) -> ActivityAction {
        ActivityAction::SaveActivity {
            new_activity: activity,
        }
    }

    #[test]
    fn new_is_empty() {
        let state = ActivityState::new();
        assert!(state.activities().is_empty());
        assert_eq!(state.active_id(), None);
    }

    mod upsert {
        use super::*;

        #[test]
        fn inserts_new_id() {
            let mut state = ActivityState::new();
            let salad = activity("Salad", Category::Food, 300);
            assert_eq!(state.upsert(salad.clone()), Upsert::Inserted);
            assert_eq!(state.activities(), &[salad]);
        }

        #[test]
        fn appends_in_order() {
            let mut state = ActivityState::new();
            let a = activity("Salad", Category::Food, 300);
            let b = activity("Run", Category::Exercise, 400);
            state.upsert(a.clone());
            state.upsert(b.clone());
            assert_eq!(state.activities(), &[a, b]);
        }

        #[test]
        fn replaces_existing_id_in_place() {
            let mut state = ActivityState::new();
            let a = activity("Salad", Category::Food, 300);
            let b = activity("Run", Category::Exercise, 400);
            state.upsert(a.clone());
            state.upsert(b.clone());

            let edited = Activity {
                name: "Big salad".to_string(),
                calories: 550,
                ..a.clone()
            };
            assert_eq!(state.upsert(edited.clone()), Upsert::Replaced);
            assert_eq!(state.activities(), &[edited, b]);
        }
    }

    mod dispatch {
        use super::*;

        #[test]
        fn save_clears_active_id() {
            let mut state = ActivityState::new();
            let a = activity("Salad", Category::Food, 300);
            state.dispatch(save(a.clone()));
            state.dispatch(ActivityAction::SetActiveId { id: a.id });
            assert_eq!(state.active_id(), Some(a.id));

            state.dispatch(save(a.clone()));
            assert_eq!(state.active_id(), None);
            assert_eq!(state.activities().len(), 1);
        }

        #[test]
        fn set_active_id() {
            let mut state = ActivityState::new();
            let a = activity("Run", Category::Exercise, 400);
            state.dispatch(save(a.clone()));
            state.dispatch(ActivityAction::SetActiveId { id: a.id });
            assert_eq!(state.active_id(), Some(a.id));
            assert_eq!(state.get(a.id), Some(&a));
        }

        #[test]
        fn delete_removes_record() {
            let mut state = ActivityState::new();
            let a = activity("Salad", Category::Food, 300);
            let b = activity("Run", Category::Exercise, 400);
            state.dispatch(save(a.clone()));
            state.dispatch(save(b.clone()));
            state.dispatch(ActivityAction::DeleteActivity { id: a.id });
            assert_eq!(state.activities(), &[b]);
            assert_eq!(state.get(a.id), None);
        }

        #[test]
        fn delete_of_active_record_clears_active_id() {
            let mut state = ActivityState::new();
            let a = activity("Salad", Category::Food, 300);
            state.dispatch(save(a.clone()));
            state.dispatch(ActivityAction::SetActiveId { id: a.id });
            state.dispatch(ActivityAction::DeleteActivity { id: a.id });
            assert_eq!(state.active_id(), None);
        }

        #[test]
        fn delete_of_other_record_keeps_active_id() {
            let mut state = ActivityState::new();
            let a = activity("Salad", Category::Food, 300);
            let b = activity("Run", Category::Exercise, 400);
            state.dispatch(save(a.clone()));
            state.dispatch(save(b.clone()));
            state.dispatch(ActivityAction::SetActiveId { id: a.id });
            state.dispatch(ActivityAction::DeleteActivity { id: b.id });
            assert_eq!(state.active_id(), Some(a.id));
        }

        #[test]
        fn restart_clears_everything() {
            let mut state = ActivityState::new();
            let a = activity("Salad", Category::Food, 300);
            state.dispatch(save(a.clone()));
            state.dispatch(ActivityAction::SetActiveId { id: a.id });
            state.dispatch(ActivityAction::RestartApp);
            assert_eq!(state, ActivityState::new());
        }
    }

    mod wire_format {
        use super::*;

        fn fixed_id() -> ActivityId {
            ActivityId::from_uuid(Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef))
        }

        #[test]
        fn save_activity_wire_shape() {
            let action = save(Activity {
                id: fixed_id(),
                category: Category::Food,
                name: "Salad".to_string(),
                calories: 300,
            });
            let json = serde_json::to_string(&action).unwrap();
            insta::assert_snapshot!(json, @r#"{"kind":"save-activity","payload":{"newActivity":{"id":"01234567-89ab-cdef-0123-456789abcdef","category":1,"name":"Salad","calories":300}}}"#);
        }

        #[test]
        fn restart_wire_shape() {
            let json = serde_json::to_string(&ActivityAction::RestartApp).unwrap();
            insta::assert_snapshot!(json, @r#"{"kind":"restart-app"}"#);
        }

        #[test]
        fn set_active_id_round_trip() {
            let action = ActivityAction::SetActiveId { id: fixed_id() };
            let json = serde_json::to_string(&action).unwrap();
            let parsed: ActivityAction = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, action);
        }
    }
}
