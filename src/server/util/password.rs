use bcrypt::BcryptError;

/// Slow adaptive one-way hasher for account passwords.
///
/// Wraps bcrypt with a configurable cost factor so tests can run at the minimum cost while
/// production uses [`bcrypt::DEFAULT_COST`] or higher.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher using the provided bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes `plaintext` into a salted digest
    pub fn hash(&self, plaintext: &str) -> Result<String, BcryptError> {
        bcrypt::hash(plaintext, self.cost)
    }

    /// Checks `plaintext` against a digest produced by [`Self::hash`]
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
        bcrypt::verify(plaintext, digest)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
