use jsonwebtoken::Algorithm;
use std::env;

/// Runtime configuration loaded from the environment.
///
/// The signing secret and algorithm are mandatory: the service must not start
/// without them, so `from_env` panics instead of degrading to a default.
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub token_expire_minutes: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_algorithm: env::var("JWT_ALGORITHM")
                .expect("JWT_ALGORITHM must be set")
                .parse()
                .expect("JWT_ALGORITHM must be a valid JWT algorithm (e.g. HS256)"),
            token_expire_minutes: env::var("TOKEN_EXPIRE_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("TOKEN_EXPIRE_MINUTES must be a number"),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
