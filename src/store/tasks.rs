use crate::error::AppError;
use crate::models::{Task, TaskInput};
use sqlx::PgPool;
use uuid::Uuid;

/// Task persistence operations, always scoped to an owner email.
///
/// Update and delete filter on `id AND owner` in a single statement, so a
/// task owned by someone else is indistinguishable from a task that does not
/// exist. Keep the checks combined: separating them would leak existence.
#[derive(Clone)]
pub struct TaskStore {
    pool: PgPool,
}

impl TaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a new task for `owner` with a fresh id and `completed = false`.
    pub async fn create(&self, owner: &str, input: &TaskInput) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, title, description, owner)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, description, completed, owner, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&input.title)
        .bind(&input.description)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    /// Returns every task owned by `owner`.
    pub async fn list(&self, owner: &str) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, completed, owner, created_at, updated_at
             FROM tasks WHERE owner = $1
             ORDER BY created_at",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    /// Replaces title and description of the task with `task_id` owned by
    /// `owner`. `completed`, `owner`, and `id` are left untouched.
    ///
    /// Last-write-wins under concurrent updates to the same task.
    pub async fn update(
        &self,
        owner: &str,
        task_id: Uuid,
        input: &TaskInput,
    ) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = $1, description = $2, updated_at = now()
             WHERE id = $3 AND owner = $4
             RETURNING id, title, description, completed, owner, created_at, updated_at",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(task_id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or(AppError::TaskNotFound)
    }

    /// Permanently removes the task with `task_id` owned by `owner`.
    pub async fn delete(&self, owner: &str, task_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND owner = $2")
            .bind(task_id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::TaskNotFound);
        }

        Ok(())
    }
}
