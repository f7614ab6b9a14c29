use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web::Data};
use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};
use uuid::Uuid;

use crate::config::Config;
use crate::database::models::{AuthResponse, CreateUserInput, LoginInput, User, UserInfo};
use crate::database::repositories::UserRepository;
use crate::error::{AppError, is_unique_violation};
use crate::middleware::RequestIdExt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid, // user id
    pub username: String,
    pub exp: usize, // expiration time
}

impl Claims {
    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}

/// Signs an HS256 token for the user, valid for the configured number of days
pub fn issue_token(user_id: Uuid, username: &str, config: &Config) -> Result<String, AppError> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::days(config.jwt_expiration_days))
        .ok_or_else(|| AppError::internal_server_error_message("Token expiry out of range"))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_ref()),
    )
    .map_err(|e| {
        log::error!("Failed to sign token: {}", e);
        AppError::internal_server_error_message("Failed to sign token")
    })
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|token_data| token_data.claims)
    .map_err(|e| {
        log::debug!("Rejected token: {}", e);
        AppError::Unauthorized
    })
}

fn claims_from_request(req: &HttpRequest) -> Result<Claims, AppError> {
    let correlation_id = req.correlation_id().unwrap_or_else(|| "-".to_string());

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| {
            log::debug!(
                "No bearer token on {} (correlation_id={})",
                req.path(),
                correlation_id
            );
            AppError::Unauthorized
        })?;

    let config = req.app_data::<Data<Config>>().ok_or_else(|| {
        log::error!("Config is not registered as app data");
        AppError::internal_server_error()
    })?;

    verify_token(token, &config.jwt_secret).inspect_err(|_| {
        log::warn!(
            "Invalid token on {} (correlation_id={})",
            req.path(),
            correlation_id
        );
    })
}

impl FromRequest for Claims {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(claims_from_request(req))
    }
}

#[derive(Clone)]
pub struct AuthService {
    user_repository: UserRepository,
    config: Config,
}

impl AuthService {
    pub fn new(user_repository: UserRepository, config: Config) -> Self {
        Self {
            user_repository,
            config,
        }
    }

    pub async fn register(&self, request: CreateUserInput) -> Result<AuthResponse, AppError> {
        let username = request.username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::BadRequest("Username must not be blank".to_string()));
        }
        if request.password.trim().is_empty() {
            return Err(AppError::BadRequest("Password must not be blank".to_string()));
        }

        if self.user_repository.username_exists(&username).await? {
            return Err(AppError::Conflict(format!("Username {} is taken", username)));
        }

        let user = self.create_user(username, &request.password).await?;
        let token = issue_token(user.id, &user.username, &self.config)?;

        log::info!("Registered user {}", user.id);

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn login(&self, request: LoginInput) -> Result<AuthResponse, AppError> {
        let user = self
            .user_repository
            .find_by_username(request.username.trim())
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !verify(&request.password, &user.password_hash)? {
            log::warn!("Failed login for user {}", user.id);
            return Err(AppError::Unauthorized);
        }

        let token = issue_token(user.id, &user.username, &self.config)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserInfo, AppError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .map(UserInfo::from)
            .ok_or(AppError::UserNotFound)
    }

    /// Creates the configured seed accounts that do not exist yet
    pub async fn seed_users(&self) -> Result<usize, AppError> {
        let mut created = 0;

        for seed in &self.config.seed_users {
            if self.user_repository.username_exists(&seed.username).await? {
                continue;
            }

            self.create_user(seed.username.clone(), &seed.password)
                .await?;
            created += 1;
            log::info!("Seeded user {}", seed.username);
        }

        Ok(created)
    }

    async fn create_user(&self, username: String, password: &str) -> Result<User, AppError> {
        let password_hash = hash(password, self.config.bcrypt_cost)?;
        let user = User::new(username, password_hash);

        self.user_repository.create_user(&user).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(format!("Username {} is taken", user.username))
            } else {
                AppError::from(e)
            }
        })
    }
}
