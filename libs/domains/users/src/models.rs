/// A stored account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    /// Unique login name
    pub login: String,
    /// Argon2 PHC string
    pub password_hash: String,
}

/// Input for creating an account. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub password_hash: String,
}
