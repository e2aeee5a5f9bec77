use serde::{Deserialize, Serialize};

/// Kind of account behind a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Admin,
    Branch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub branch_id: String,
}

/// `POST /api/auth/login` and `/api/auth/register` both answer with this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub branch_id: String,
    pub account_type: AccountType,
}

/// One row of the admin panel's account list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub username: String,
    pub account_type: AccountType,
    pub branch_id: String,
}

/// The session object persisted to client storage alongside the raw token.
/// At most one is live per browser context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub branch_id: String,
    pub account_type: AccountType,
    pub username: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.account_type == AccountType::Admin
    }

    /// Admins manage every branch's stock; branch accounts only their own.
    pub fn can_manage_stock(&self, branch_id: &str) -> bool {
        self.is_admin() || self.branch_id == branch_id
    }
}

/// Claims this frontend relies on. `iat` is carried but unused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub exp: i64,
    pub iat: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_uses_wire_names() {
        assert_eq!(serde_json::to_string(&AccountType::Admin).unwrap(), r#""ADMIN""#);
        assert_eq!(
            serde_json::from_str::<AccountType>(r#""BRANCH""#).unwrap(),
            AccountType::Branch
        );
    }

    #[test]
    fn stock_permission_by_account_type() {
        let admin = Session {
            token: "t".into(),
            branch_id: "1".into(),
            account_type: AccountType::Admin,
            username: "x".into(),
        };
        let branch = Session {
            account_type: AccountType::Branch,
            ..admin.clone()
        };

        assert!(admin.can_manage_stock("2"));
        assert!(branch.can_manage_stock("1"));
        assert!(!branch.can_manage_stock("2"));
    }
}
