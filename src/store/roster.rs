use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::models::Activity;

/// Failed roster mutation. Each variant maps to exactly one HTTP status
/// in the web layer; the display strings are the user-facing detail
/// messages clients match on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

/// In-memory activity roster, keyed by activity name.
///
/// The activity set is fixed after construction; only the participant
/// lists change. A single lock around the whole map keeps each
/// check-then-write atomic across worker threads, and is never held
/// across an await point.
#[derive(Clone)]
pub struct RosterStore {
    activities: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl RosterStore {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// Current state of every activity, keyed by name.
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities
            .read()
            .expect("roster lock poisoned")
            .clone()
    }

    /// Adds `email` to the activity's participant list.
    ///
    /// Signups past `max_participants` are accepted; capacity is
    /// informational only.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().expect("roster lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RosterError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the activity's participant list.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().expect("roster lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotRegistered);
        };
        activity.participants.remove(pos);
        Ok(())
    }
}
