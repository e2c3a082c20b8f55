use actix_web::dev::Payload;
use actix_web::{web, Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::auth::token::Claims;
use crate::error::AppError;
use crate::models::User;
use crate::store::UserStore;

/// Resolves the authenticated caller to a full [`User`] record.
///
/// Intended for routes behind `AuthMiddleware`, which validates the bearer
/// token and inserts the decoded [`Claims`] into request extensions. This
/// extractor takes the subject email from those claims and loads the matching
/// user through the [`UserStore`] registered in app data.
///
/// A token can outlive its account: if the subject no longer maps to a stored
/// user, extraction fails with [`AppError::UserNotFound`].
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError; // AppError is converted into ActixError via ResponseError
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();
        let store = req.app_data::<web::Data<UserStore>>().cloned();

        Box::pin(async move {
            let claims = claims.ok_or_else(|| {
                // Reached only when the middleware did not run on this route.
                AppError::InvalidToken(
                    "No verified claims on request. Ensure AuthMiddleware is active.".to_string(),
                )
            })?;

            let store = store.ok_or_else(|| {
                AppError::InternalServerError("UserStore not registered in app data".to_string())
            })?;

            let user = store
                .find_by_email(&claims.sub)
                .await?
                .ok_or(AppError::UserNotFound)?;

            Ok(AuthenticatedUser(user))
        })
    }
}
