use crate::{auth::AuthenticatedUser, error::AppError, models::TaskInput, store::TaskStore};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

/// Creates a new task for the authenticated user.
///
/// The owner is taken from the verified identity, never from the payload, and
/// the task starts out not completed.
///
/// ## Request Body:
/// - `title`: The title of the task (required, 1–200 characters).
/// - `description` (optional): A description of the task (up to 1000 characters).
///
/// ## Responses:
/// - `200 OK`: Returns the newly created task, including its generated id.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `422 Unprocessable Entity`: If input validation fails.
#[post("")]
pub async fn create_task(
    tasks: web::Data<TaskStore>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let input = task_data.into_inner();
    let task = tasks.create(&user.0.email, &input).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Retrieves all tasks owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of tasks.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
#[get("")]
pub async fn list_tasks(
    tasks: web::Data<TaskStore>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = tasks.list(&user.0.email).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Updates the title and description of a task owned by the authenticated user.
///
/// `completed`, `owner`, and `id` are never changed by this endpoint.
///
/// ## Path Parameters:
/// - `id`: The UUID of the task to update.
///
/// ## Responses:
/// - `200 OK`: Returns the updated task.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no task with that id exists for this owner. A task
///   owned by another user yields the same response as a missing one.
/// - `422 Unprocessable Entity`: If input validation fails.
#[put("/{id}")]
pub async fn update_task(
    tasks: web::Data<TaskStore>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let input = task_data.into_inner();
    let task = tasks
        .update(&user.0.email, task_id.into_inner(), &input)
        .await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task owned by the authenticated user.
///
/// ## Path Parameters:
/// - `id`: The UUID of the task to delete.
///
/// ## Responses:
/// - `200 OK`: Confirmation message on successful deletion.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no task with that id exists for this owner.
#[delete("/{id}")]
pub async fn delete_task(
    tasks: web::Data<TaskStore>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    tasks.delete(&user.0.email, task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task deleted successfully"
    })))
}
