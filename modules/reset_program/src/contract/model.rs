use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The program focus a user picks at onboarding. Drives which scripture
/// themes accompany the daily tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetGoal {
    BudgetDiscipline,
    DebtReset,
    SavingsGrowth,
    GivingConsistency,
}

impl Default for ResetGoal {
    fn default() -> Self {
        Self::BudgetDiscipline
    }
}

impl ResetGoal {
    pub const ALL: [Self; 4] = [
        Self::BudgetDiscipline,
        Self::DebtReset,
        Self::SavingsGrowth,
        Self::GivingConsistency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BudgetDiscipline => "budget_discipline",
            Self::DebtReset => "debt_reset",
            Self::SavingsGrowth => "savings_growth",
            Self::GivingConsistency => "giving_consistency",
        }
    }
}

impl std::str::FromStr for ResetGoal {
    type Err = UnknownGoal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget_discipline" => Ok(Self::BudgetDiscipline),
            "debt_reset" => Ok(Self::DebtReset),
            "savings_growth" => Ok(Self::SavingsGrowth),
            "giving_consistency" => Ok(Self::GivingConsistency),
            _ => Err(UnknownGoal),
        }
    }
}

/// Parse failure for [`ResetGoal`] strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownGoal;

impl std::fmt::Display for UnknownGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown reset goal")
    }
}

impl std::error::Error for UnknownGoal {}

/// A user's assembled reset plan: the plan row plus its completed-task set
/// and reflection log.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: DateTime<Utc>,
    /// Completed task ids; membership is what matters, ordered by
    /// completion time for presentation.
    pub completed_task_ids: Vec<String>,
    /// Count of consecutive calendar days with at least one completion.
    pub streak: u32,
    pub last_completed_date: Option<NaiveDate>,
    pub weekly_reflections: Vec<WeeklyReflection>,
    pub created_at: DateTime<Utc>,
}

impl ResetPlan {
    /// Position in the program: one step per completed task.
    pub fn day_index(&self) -> usize {
        self.completed_task_ids.len()
    }
}

/// One appended weekly-reflection entry. Never edited after the fact.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReflection {
    pub week: u32,
    pub wins: String,
    pub challenges: String,
    pub next_steps: String,
    pub completed_at: DateTime<Utc>,
}

/// Data for a new weekly reflection; the timestamp is server-assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReflection {
    pub week: u32,
    pub wins: String,
    pub challenges: String,
    pub next_steps: String,
}

/// Administrative field patch. Only these fields may be corrected; the
/// completion set and reflections have their own operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanPatch {
    pub start_date: Option<DateTime<Utc>>,
    pub streak: Option<u32>,
    pub last_completed_date: Option<NaiveDate>,
}

impl PlanPatch {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.streak.is_none() && self.last_completed_date.is_none()
    }
}
