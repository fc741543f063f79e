use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Duration, TimeZone, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::{info, warn};
use uuid::Uuid;

use crate::commands::input::required_email;
use crate::dtos::{LoginRequest, LoginResponse};
use crate::{Actor, AppError, AppState};
use backend_domain::{RuntimeConfig, UserId};

const TOKEN_PREFIX: &str = "fguild";
const TOKEN_VERSION: &str = "v1";

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub async fn login(state: &AppState, payload: LoginRequest) -> Result<LoginResponse, AppError> {
    let email = required_email(payload.email)?;
    let password = payload.password.unwrap_or_default();

    let Some(user) = state.users.find_user_by_email(&email).await? else {
        warn!(email = %email, "login rejected: unknown email");
        return Err(AppError::Unauthorized);
    };
    if !verify_password(state, password, user.password_hash.clone()).await? {
        warn!(user_id = %user.id, "login rejected: wrong password");
        return Err(AppError::Unauthorized);
    }

    let session = issue_session(&state.config, user.id, Utc::now())?;
    info!(user_id = %user.id, "session issued");
    Ok(LoginResponse {
        user,
        token: session.token,
        expires_at: session.expires_at,
    })
}

/// Argon2 is CPU-bound, so hashing runs on the blocking pool.
pub async fn hash_password(state: &AppState, password: String) -> Result<String, AppError> {
    let passwords = Arc::clone(&state.passwords);
    let hashed = tokio::task::spawn_blocking(move || passwords.hash_password(&password))
        .await
        .map_err(|err| AppError::Internal(anyhow!("password hashing task failed: {}", err)))?;
    Ok(hashed?)
}

pub async fn verify_password(
    state: &AppState,
    password: String,
    hash: String,
) -> Result<bool, AppError> {
    let passwords = Arc::clone(&state.passwords);
    tokio::task::spawn_blocking(move || passwords.verify_password(&password, &hash))
        .await
        .map_err(|err| AppError::Internal(anyhow!("password check task failed: {}", err)))
}

/// Resolves a bearer token to the user it was issued for.
pub async fn authenticate(state: &AppState, token: &str) -> Result<Actor, AppError> {
    let user_id = verify_session(&state.config, token, Utc::now())?;
    let user = state
        .users
        .find_user(user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;
    Ok(Actor::new(user))
}

pub fn issue_session(
    config: &RuntimeConfig,
    user_id: UserId,
    now: DateTime<Utc>,
) -> Result<SessionToken, AppError> {
    let ttl_hours = i64::try_from(config.session_ttl_hours.max(1))
        .map_err(|_| AppError::Internal(anyhow!("session ttl out of range")))?;
    let expires_at = now + Duration::hours(ttl_hours);
    let expires = expires_at.timestamp();
    let payload_to_sign = signing_payload(user_id, expires);
    let signature = sign_hmac_sha256(&config.session_secret, &payload_to_sign)?;
    let token = format!(
        "{}.{}.{}.{}.{}",
        TOKEN_PREFIX, TOKEN_VERSION, user_id, expires, signature
    );
    let expires_at = Utc
        .timestamp_opt(expires, 0)
        .single()
        .ok_or_else(|| AppError::Internal(anyhow!("failed to resolve session expiry")))?;
    Ok(SessionToken { token, expires_at })
}

/// Any malformed, tampered or expired token is reported as `Unauthorized`.
pub fn verify_session(
    config: &RuntimeConfig,
    token: &str,
    now: DateTime<Utc>,
) -> Result<UserId, AppError> {
    let parts = token.trim().split('.').collect::<Vec<_>>();
    let [prefix, version, user_id, expires, signature] = parts.as_slice() else {
        return Err(AppError::Unauthorized);
    };
    if *prefix != TOKEN_PREFIX || *version != TOKEN_VERSION {
        return Err(AppError::Unauthorized);
    }
    let user_id = Uuid::parse_str(user_id).map_err(|_| AppError::Unauthorized)?;
    let expires = expires.parse::<i64>().map_err(|_| AppError::Unauthorized)?;
    let signature = decode_hex(signature).ok_or(AppError::Unauthorized)?;

    let mut mac = HmacSha256::new_from_slice(config.session_secret.as_bytes())
        .map_err(|err| AppError::Internal(anyhow!("hmac init failed: {err}")))?;
    mac.update(signing_payload(user_id, expires).as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| AppError::Unauthorized)?;

    if expires <= now.timestamp() {
        return Err(AppError::Unauthorized);
    }
    Ok(user_id)
}

fn signing_payload(user_id: UserId, expires: i64) -> String {
    format!("{}|{}|{}|{}", TOKEN_PREFIX, TOKEN_VERSION, user_id, expires)
}

fn sign_hmac_sha256(secret: &str, payload: &str) -> Result<String, AppError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|err| AppError::Internal(anyhow!("hmac init failed: {err}")))?;
    mac.update(payload.as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    Ok(out)
}

fn decode_hex(value: &str) -> Option<Vec<u8>> {
    if value.len() % 2 != 0 || !value.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    (0..value.len())
        .step_by(2)
        .map(|idx| u8::from_str_radix(&value[idx..idx + 2], 16).ok())
        .collect()
}
