use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{password, AuthError, Identity, Role, Token, TokenGate};
use crate::model::{Model, ModelError, ModelStore, ModelsExt};

/// A stored account, keyed by its normalised email address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub email: String,
    pub user_id: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Model for Account {
    const COLLECTION: &'static str = "accounts";

    fn id(&self) -> &str {
        &self.email
    }
}

/// Account fields safe to return to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&Account> for PublicUser {
    fn from(account: &Account) -> Self {
        PublicUser {
            id: account.user_id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub message: String,
    pub token: Token,
    pub user: PublicUser,
}

/// The initial administrator created at startup when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for AdminSeed {
    fn default() -> Self {
        Self {
            name: "store_manager".into(),
            email: "admin@mystore.com".into(),
            password: "admin123".into(),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Registration, login and account listing.
#[derive(Clone)]
pub struct Accounts<S> {
    store: S,
    tokens: TokenGate,
    hash_cost: u32,
}

impl<S: ModelStore> Accounts<S> {
    pub fn new(store: S, tokens: TokenGate) -> Self {
        Self {
            store,
            tokens,
            hash_cost: password::DEFAULT_COST,
        }
    }

    /// Override the bcrypt cost (tests use the minimum, 4).
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    pub fn tokens(&self) -> &TokenGate {
        &self.tokens
    }

    fn create(&self, name: &str, email: &str, password: &str, role: Role) -> Result<Account, AuthError> {
        let account = Account {
            email: normalize_email(email),
            user_id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            password_hash: password::hash(password, self.hash_cost)?,
            role,
            created_at: Utc::now(),
        };

        match self.store.models::<Account>().insert(&account) {
            Ok(saved) => Ok(saved.data),
            Err(ModelError::Conflict { .. }) => Err(AuthError::Duplicate),
            Err(e) => Err(e.into()),
        }
    }

    /// Register a customer account.
    #[instrument(skip(self, name, password))]
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<PublicUser, AuthError> {
        if !(required(name) && required(email) && required(password)) {
            return Err(AuthError::Invalid(
                "Please provide name, email, and password.".into(),
            ));
        }

        let account = self.create(name, email, password, Role::Customer)?;
        info!(user_id = %account.user_id, "account registered");
        Ok(PublicUser::from(&account))
    }

    /// Check credentials and issue a bearer token.
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        if !(required(email) && required(password)) {
            return Err(AuthError::Invalid(
                "Please provide both email and password.".into(),
            ));
        }

        let account = self
            .store
            .models::<Account>()
            .get(&normalize_email(email))?
            .map(|versioned| versioned.data)
            .filter(|account| password::verify(password, &account.password_hash))
            .ok_or_else(|| {
                warn!("login rejected");
                AuthError::InvalidCredentials
            })?;

        let identity = Identity {
            user_id: account.user_id.clone(),
            email: account.email.clone(),
            role: account.role,
        };
        let token = self.tokens.issue(&identity)?;

        info!(user_id = %account.user_id, role = %account.role, "login succeeded");
        Ok(LoginOutcome {
            message: "Login successful!".into(),
            token,
            user: PublicUser::from(&account),
        })
    }

    /// Every account, without password hashes, ordered by email.
    pub fn list_users(&self) -> Result<Vec<PublicUser>, AuthError> {
        let mut users: Vec<PublicUser> = self
            .store
            .models::<Account>()
            .all()?
            .iter()
            .map(|versioned| PublicUser::from(&versioned.data))
            .collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }

    /// Create the initial administrator if no account uses its email.
    ///
    /// Returns whether an account was created.
    #[instrument(skip(self, seed), fields(email = %seed.email))]
    pub fn ensure_admin(&self, seed: &AdminSeed) -> Result<bool, AuthError> {
        if self
            .store
            .models::<Account>()
            .get(&normalize_email(&seed.email))?
            .is_some()
        {
            info!("admin account already exists; skipping");
            return Ok(false);
        }

        match self.create(&seed.name, &seed.email, &seed.password, Role::Admin) {
            Ok(_) => {
                info!("initial admin created");
                Ok(true)
            }
            Err(AuthError::Duplicate) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
