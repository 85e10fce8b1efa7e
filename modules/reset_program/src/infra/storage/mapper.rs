use crate::contract::model::{ResetPlan, WeeklyReflection};
use crate::infra::storage::entity::{completed_task, plan, reflection};

/// Assemble the contract plan from its storage rows.
pub fn assemble_plan(
    plan: plan::Model,
    completed: Vec<completed_task::Model>,
    reflections: Vec<reflection::Model>,
) -> ResetPlan {
    ResetPlan {
        id: plan.id,
        user_id: plan.user_id,
        start_date: plan.start_date,
        completed_task_ids: completed.into_iter().map(|t| t.task_id).collect(),
        streak: plan.streak.max(0) as u32,
        last_completed_date: plan.last_completed_date,
        weekly_reflections: reflections.into_iter().map(reflection_to_contract).collect(),
        created_at: plan.created_at,
    }
}

fn reflection_to_contract(row: reflection::Model) -> WeeklyReflection {
    WeeklyReflection {
        week: row.week.max(0) as u32,
        wins: row.wins,
        challenges: row.challenges,
        next_steps: row.next_steps,
        completed_at: row.completed_at,
    }
}
