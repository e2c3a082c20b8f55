use crate::{
    auth::{
        hash_password, verify_password, LoginRequest, SignupRequest, TokenResponse, TokenService,
    },
    error::AppError,
    store::UserStore,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Sign up a new user
///
/// Creates the account and immediately returns a bearer token for it.
#[post("/signup")]
pub async fn signup(
    users: web::Data<UserStore>,
    tokens: web::Data<TokenService>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    signup_data.validate()?;

    // Check if email already exists
    if users.email_exists(&signup_data.email).await? {
        return Err(AppError::DuplicateEmail);
    }

    // Hash password and insert the new user
    let password_hash = hash_password(&signup_data.password)?;
    users
        .insert(&signup_data.username, &signup_data.email, &password_hash)
        .await?;

    // Issue token for the fresh account
    let token = tokens.issue(&signup_data.email)?;

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
}

/// Log in an existing user
///
/// Authenticates by email and password and returns a bearer token.
#[post("/login")]
pub async fn login(
    users: web::Data<UserStore>,
    tokens: web::Data<TokenService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    let user = users.find_by_email(&login_data.email).await?;

    // Unknown email and wrong password are indistinguishable to the caller.
    match user {
        Some(user) if verify_password(&login_data.password, &user.password_hash) => {
            let token = tokens.issue(&user.email)?;
            Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
        }
        _ => Err(AppError::InvalidCredentials),
    }
}
