use std::time::Duration;

use uuid::Uuid;

use crate::{
    audit::log_event,
    error::{AppError, AppResult},
    models::{Address, Role, SessionIdentity, UserAccount},
};

/// Mocked account list behind the same simulated latency as the catalog.
/// Plaintext password comparison: this is demo data, not a security boundary.
pub struct AccountDirectory {
    accounts: Vec<UserAccount>,
    delay: Duration,
}

impl AccountDirectory {
    pub fn new(accounts: Vec<UserAccount>, delay: Duration) -> Self {
        Self { accounts, delay }
    }

    /// Unknown username and wrong password produce the same error, so a
    /// caller cannot tell which it was.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<SessionIdentity> {
        tokio::time::sleep(self.delay).await;

        let account = self
            .accounts
            .iter()
            .find(|account| account.username == username && account.password == password);

        match account {
            Some(account) => {
                log_event(
                    Some(account.id),
                    "login_ok",
                    Some(serde_json::json!({ "username": account.username })),
                );
                Ok(account.identity())
            }
            None => {
                log_event(
                    None,
                    "login_failed",
                    Some(serde_json::json!({ "username": username })),
                );
                Err(AppError::BadRequest(
                    "invalid username or password".to_string(),
                ))
            }
        }
    }

    pub async fn find_by_username(&self, username: &str) -> Option<UserAccount> {
        tokio::time::sleep(self.delay).await;
        self.accounts
            .iter()
            .find(|account| account.username == username)
            .cloned()
    }

    pub fn with_sample_data(delay: Duration) -> Self {
        let accounts = vec![
            UserAccount {
                id: Uuid::new_v4(),
                username: "admin".into(),
                email: "admin@aims.vn".into(),
                password: "admin123".into(),
                roles: vec![Role::Admin],
                address: None,
            },
            UserAccount {
                id: Uuid::new_v4(),
                username: "manager".into(),
                email: "manager@aims.vn".into(),
                password: "manager123".into(),
                roles: vec![Role::ProductManager],
                address: Some(Address {
                    street: "1 Dai Co Viet".into(),
                    city: "Hanoi".into(),
                    province: "Hanoi".into(),
                }),
            },
        ];
        Self::new(accounts, delay)
    }
}
