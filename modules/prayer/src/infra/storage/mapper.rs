use crate::contract::model::{PrayerEntry, PrayerGoal};
use crate::infra::storage::entity::{entry, goal};

pub fn goal_to_contract(row: goal::Model) -> PrayerGoal {
    PrayerGoal {
        id: row.id,
        user_id: row.user_id,
        month: row.month.max(0) as u32,
        year: row.year,
        title: row.title,
        notes: row.notes,
        completed: row.completed,
        linked_to_finance: row.linked_to_finance,
        created_at: row.created_at,
    }
}

pub fn entry_to_contract(row: entry::Model) -> PrayerEntry {
    PrayerEntry {
        id: row.id,
        user_id: row.user_id,
        date: row.date,
        content: row.content,
        created_at: row.created_at,
    }
}
