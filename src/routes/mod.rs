pub mod health;
pub mod tasks;
pub mod users;

use crate::auth::AuthMiddleware;
use actix_web::web;

/// Mounts the API routes.
///
/// The `/user` scope is open; the `/task` scope sits behind `AuthMiddleware`,
/// so every task handler runs with verified claims already on the request.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(users::signup)
            .service(users::login),
    )
    .service(
        web::scope("/task")
            .wrap(AuthMiddleware)
            .service(tasks::list_tasks)
            .service(tasks::create_task)
            .service(tasks::update_task)
            .service(tasks::delete_task),
    );
}
