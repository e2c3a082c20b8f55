use crate::config::Config;
use crate::error::AppError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's email address.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: usize,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Issues and verifies signed, expiring bearer tokens.
///
/// Constructed once at startup from [`Config`]; the signing secret and
/// algorithm are fixed for the lifetime of the process. Verification is
/// pinned to the configured algorithm — the `alg` field carried in a token's
/// header is never trusted, so a token signed under a different algorithm is
/// rejected even when its signature would otherwise check out.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    expiry: chrono::Duration,
}

impl TokenService {
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret,
            config.jwt_algorithm,
            config.token_expire_minutes,
        )
    }

    pub fn new(secret: &str, algorithm: Algorithm, expire_minutes: i64) -> Self {
        let mut validation = Validation::new(algorithm);
        // A token without an expiry or a subject is not acceptable here.
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            header: Header::new(algorithm),
            validation,
            expiry: chrono::Duration::minutes(expire_minutes),
        }
    }

    /// Signs a token asserting `subject` for the configured duration.
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        let now = chrono::Utc::now();
        let expiration = now
            .checked_add_signed(self.expiry)
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: subject.to_owned(),
            iat: now.timestamp() as usize,
            exp: expiration,
        };

        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token's signature and expiry and decodes its claims.
    ///
    /// Every failure mode — bad signature, foreign algorithm, malformed
    /// structure, expired, missing subject — collapses to
    /// [`AppError::InvalidToken`].
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> TokenService {
        TokenService::new("test_secret_for_gen_verify", Algorithm::HS256, 30)
    }

    #[test_log::test]
    fn test_token_issue_and_verify_round_trip() {
        let service = test_service();
        let token = service.issue("alice@example.com").unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_expiration() {
        // A service whose tokens are already two hours past expiry, well
        // beyond the decoder's default leeway.
        let expired_service =
            TokenService::new("test_secret_for_expiration", Algorithm::HS256, -120);
        let verifying_service =
            TokenService::new("test_secret_for_expiration", Algorithm::HS256, 30);

        let expired_token = expired_service.issue("bob@example.com").unwrap();

        match verifying_service.verify(&expired_token) {
            Err(AppError::InvalidToken(msg)) => {
                assert!(
                    msg.contains("ExpiredSignature"),
                    "Unexpected error message for expired token: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to expiration"),
            Err(e) => panic!("Unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_invalid_token_signature() {
        let issuing_service = TokenService::new("one_secret", Algorithm::HS256, 30);
        let verifying_service =
            TokenService::new("a_completely_different_secret", Algorithm::HS256, 30);

        let token = issuing_service.issue("carol@example.com").unwrap();

        match verifying_service.verify(&token) {
            Err(AppError::InvalidToken(msg)) => {
                assert!(
                    msg.contains("InvalidSignature") || msg.contains("InvalidToken"),
                    "Unexpected error message for invalid signature: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to signature mismatch"),
            Err(e) => panic!("Unexpected error type for invalid signature: {:?}", e),
        }
    }

    #[test]
    fn test_algorithm_confusion_is_rejected() {
        // Same secret, different algorithm: the verifier pins HS256 and must
        // not honour the HS384 declared in the token's own header.
        let hs384_service = TokenService::new("shared_secret", Algorithm::HS384, 30);
        let hs256_service = TokenService::new("shared_secret", Algorithm::HS256, 30);

        let token = hs384_service.issue("dave@example.com").unwrap();

        assert!(matches!(
            hs256_service.verify(&token),
            Err(AppError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_token_without_subject_is_rejected() {
        #[derive(Serialize)]
        struct SubjectlessClaims {
            iat: usize,
            exp: usize,
        }

        let service = test_service();
        let now = chrono::Utc::now().timestamp() as usize;
        let token = encode(
            &Header::new(Algorithm::HS256),
            &SubjectlessClaims {
                iat: now,
                exp: now + 1800,
            },
            &EncodingKey::from_secret("test_secret_for_gen_verify".as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AppError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = test_service();
        assert!(matches!(
            service.verify("not.a.jwt"),
            Err(AppError::InvalidToken(_))
        ));
    }
}
