/// Access token holding the bearer value and computed expiration
#[derive(Debug, Clone)]
pub struct Token {
    pub value: String,
    pub expires_at: i64, // UNIX timestamp
}

impl Token {
    pub fn new(value: String, expires_at: i64) -> Self {
        Self { value, expires_at }
    }

    /// A token must not be reused at or after `expires_at`.
    pub fn is_valid_at(&self, now: i64) -> bool {
        now < self.expires_at
    }
}
