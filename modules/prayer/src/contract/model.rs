use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A monthly prayer goal. At most three may exist per (owner, month, year).
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerGoal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub month: u32,
    pub year: i32,
    pub title: String,
    pub notes: Option<String>,
    pub completed: bool,
    /// Marks the goal as conceptually tied to a finance goal.
    pub linked_to_finance: bool,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a goal; id/timestamps are server-assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPrayerGoal {
    pub month: u32,
    pub year: i32,
    pub title: String,
    pub notes: Option<String>,
    pub linked_to_finance: bool,
}

/// Closed patch for a goal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
    pub linked_to_finance: Option<bool>,
}

impl GoalPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.notes.is_none()
            && self.completed.is_none()
            && self.linked_to_finance.is_none()
    }
}

/// One dated journal entry. Append-only: created and deleted, never edited.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPrayerEntry {
    pub date: DateTime<Utc>,
    pub content: String,
}
