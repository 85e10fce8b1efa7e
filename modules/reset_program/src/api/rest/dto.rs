use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::contract::model::{NewReflection, PlanPatch, ResetPlan, WeeklyReflection};
use crate::domain::program::{self, DayTask, Scripture};
use crate::domain::service::TodayView;

/// REST DTO for the assembled reset plan.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetPlanDto {
    pub id: Uuid,
    pub start_date: DateTime<Utc>,
    /// Position in the program: one step per completed task.
    pub day_index: u32,
    /// Day number shown to the user, capped at 90.
    pub day_number: u32,
    pub completed_task_ids: Vec<String>,
    pub streak: u32,
    pub last_completed_date: Option<NaiveDate>,
    pub weekly_reflections: Vec<ReflectionDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReflectionDto {
    pub week: u32,
    pub wins: String,
    pub challenges: String,
    pub next_steps: String,
    pub completed_at: DateTime<Utc>,
}

/// One entry of the fixed program table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskDto {
    pub id: String,
    pub week: u8,
    pub day: u8,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScriptureDto {
    pub id: String,
    pub verse: String,
    pub reference: String,
    pub theme: String,
}

/// Response for the "today" view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodayDto {
    pub day_number: u32,
    pub streak: u32,
    pub task: TaskDto,
    pub scripture: ScriptureDto,
}

/// Request to mark a task completed. Safe to repeat.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompleteTaskReq {
    pub task_id: String,
}

/// Request to append a weekly reflection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddReflectionReq {
    pub week: u32,
    #[serde(default)]
    pub wins: String,
    #[serde(default)]
    pub challenges: String,
    #[serde(default)]
    pub next_steps: String,
}

/// Administrative field patch; only these fields can be corrected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PlanPatchReq {
    pub start_date: Option<DateTime<Utc>>,
    pub streak: Option<u32>,
    pub last_completed_date: Option<NaiveDate>,
}

// Conversions between REST DTOs and contract/domain models

impl From<ResetPlan> for ResetPlanDto {
    fn from(plan: ResetPlan) -> Self {
        let day_index = plan.day_index();
        Self {
            id: plan.id,
            start_date: plan.start_date,
            day_index: day_index as u32,
            day_number: program::day_number(day_index),
            completed_task_ids: plan.completed_task_ids,
            streak: plan.streak,
            last_completed_date: plan.last_completed_date,
            weekly_reflections: plan
                .weekly_reflections
                .into_iter()
                .map(ReflectionDto::from)
                .collect(),
            created_at: plan.created_at,
        }
    }
}

impl From<WeeklyReflection> for ReflectionDto {
    fn from(r: WeeklyReflection) -> Self {
        Self {
            week: r.week,
            wins: r.wins,
            challenges: r.challenges,
            next_steps: r.next_steps,
            completed_at: r.completed_at,
        }
    }
}

impl From<&DayTask> for TaskDto {
    fn from(task: &DayTask) -> Self {
        use crate::domain::program::TaskKind;
        Self {
            id: task.id.to_string(),
            week: task.week,
            day: task.day,
            title: task.title.to_string(),
            description: task.description.to_string(),
            kind: match task.kind {
                TaskKind::Reflection => "reflection",
                TaskKind::Action => "action",
                TaskKind::Prayer => "prayer",
                TaskKind::Study => "study",
            }
            .to_string(),
            theme: task.theme.to_string(),
        }
    }
}

impl From<&Scripture> for ScriptureDto {
    fn from(s: &Scripture) -> Self {
        use crate::domain::program::ScriptureTheme;
        Self {
            id: s.id.to_string(),
            verse: s.verse.to_string(),
            reference: s.reference.to_string(),
            theme: match s.theme {
                ScriptureTheme::Stewardship => "stewardship",
                ScriptureTheme::Discipline => "discipline",
                ScriptureTheme::Generosity => "generosity",
                ScriptureTheme::Peace => "peace",
                ScriptureTheme::Wisdom => "wisdom",
                ScriptureTheme::Diligence => "diligence",
            }
            .to_string(),
        }
    }
}

impl From<TodayView> for TodayDto {
    fn from(view: TodayView) -> Self {
        Self {
            day_number: view.day_number,
            streak: view.streak,
            task: TaskDto::from(view.task),
            scripture: ScriptureDto::from(view.scripture),
        }
    }
}

impl From<AddReflectionReq> for NewReflection {
    fn from(req: AddReflectionReq) -> Self {
        Self {
            week: req.week,
            wins: req.wins,
            challenges: req.challenges,
            next_steps: req.next_steps,
        }
    }
}

impl From<PlanPatchReq> for PlanPatch {
    fn from(req: PlanPatchReq) -> Self {
        Self {
            start_date: req.start_date,
            streak: req.streak,
            last_completed_date: req.last_completed_date,
        }
    }
}
