use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::contract::model::{
    GoalPatch, NewPrayerEntry, NewPrayerGoal, PrayerEntry, PrayerGoal,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoalDto {
    pub id: Uuid,
    pub month: u32,
    pub year: i32,
    pub title: String,
    pub notes: Option<String>,
    pub completed: bool,
    pub linked_to_finance: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGoalReq {
    pub month: u32,
    pub year: i32,
    pub title: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub linked_to_finance: bool,
}

/// Closed patch for a goal; only these fields can change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct GoalPatchReq {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
    pub linked_to_finance: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryDto {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEntryReq {
    pub date: DateTime<Utc>,
    pub content: String,
}

/// Optional month filter for goal lists.
#[derive(Debug, Clone, Deserialize, ToSchema, Default)]
pub struct GoalListQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

// Conversion implementations between REST DTOs and contract models

impl From<PrayerGoal> for GoalDto {
    fn from(g: PrayerGoal) -> Self {
        Self {
            id: g.id,
            month: g.month,
            year: g.year,
            title: g.title,
            notes: g.notes,
            completed: g.completed,
            linked_to_finance: g.linked_to_finance,
            created_at: g.created_at,
        }
    }
}

impl From<CreateGoalReq> for NewPrayerGoal {
    fn from(req: CreateGoalReq) -> Self {
        Self {
            month: req.month,
            year: req.year,
            title: req.title,
            notes: req.notes,
            linked_to_finance: req.linked_to_finance,
        }
    }
}

impl From<GoalPatchReq> for GoalPatch {
    fn from(req: GoalPatchReq) -> Self {
        Self {
            title: req.title,
            notes: req.notes,
            completed: req.completed,
            linked_to_finance: req.linked_to_finance,
        }
    }
}

impl From<PrayerEntry> for EntryDto {
    fn from(e: PrayerEntry) -> Self {
        Self {
            id: e.id,
            date: e.date,
            content: e.content,
            created_at: e.created_at,
        }
    }
}

impl From<CreateEntryReq> for NewPrayerEntry {
    fn from(req: CreateEntryReq) -> Self {
        Self {
            date: req.date,
            content: req.content,
        }
    }
}
