//! Signed bearer tokens.
//!
//! A token is `base64url(json claims) "." base64url(HMAC-SHA256(secret, claims part))`.

use std::time::Duration;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use super::{AuthError, Identity, Role};

type HmacSha256 = Hmac<Sha256>;

/// Claims carried by a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Identity {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn mac(secret: &str, payload: &str) -> Result<HmacSha256, AuthError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AuthError::Signing(e.to_string()))?;
    mac.update(payload.as_bytes());
    Ok(mac)
}

/// Sign an identity into a token valid for `ttl` from `now`.
pub fn sign_at(
    identity: &Identity,
    secret: &str,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<Token, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::Signing("token secret is empty".into()));
    }
    let ttl = chrono::Duration::from_std(ttl).map_err(|e| AuthError::Signing(e.to_string()))?;

    let claims = Claims {
        sub: identity.user_id.clone(),
        email: identity.email.clone(),
        role: identity.role,
        exp: (now + ttl).timestamp(),
    };
    let payload = serde_json::to_vec(&claims).map_err(|e| AuthError::Signing(e.to_string()))?;
    let payload = URL_SAFE_NO_PAD.encode(payload);
    let signature = URL_SAFE_NO_PAD.encode(mac(secret, &payload)?.finalize().into_bytes());

    Ok(Token(format!("{}.{}", payload, signature)))
}

/// Sign an identity into a token valid for `ttl` from now.
pub fn sign(identity: &Identity, secret: &str, ttl: Duration) -> Result<Token, AuthError> {
    sign_at(identity, secret, ttl, Utc::now())
}

/// Check a token's signature and expiry at `now`.
pub fn verify(token: &str, secret: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
    let (payload, signature) = token.split_once('.').ok_or(AuthError::MalformedToken)?;
    let signature = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|_| AuthError::MalformedToken)?;

    mac(secret, payload)?
        .verify_slice(&signature)
        .map_err(|_| AuthError::BadSignature)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AuthError::MalformedToken)?;
    let claims: Claims = serde_json::from_slice(&payload).map_err(|_| AuthError::MalformedToken)?;

    if claims.exp <= now.timestamp() {
        return Err(AuthError::Expired);
    }
    Ok(claims)
}
