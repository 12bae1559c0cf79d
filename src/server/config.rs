use crate::server::error::config::ConfigError;

static DEFAULT_ADMIN_USERNAME: &str = "admin";
static DEFAULT_ADMIN_PASSWORD: &str = "admin";
static DEFAULT_ADMIN_EMAIL: &str = "admin@db.local";

/// Credentials for the administrator account created on first start.
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    pub email: String,
}

pub struct Config {
    pub database_url: String,
    pub bcrypt_cost: u32,
    pub admin: AdminConfig,
}

impl Config {
    /// Reads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, returning `None` for unset variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            None => bcrypt::DEFAULT_COST,
            Some(raw) => parse_bcrypt_cost(&raw)?,
        };

        Ok(Self {
            database_url,
            bcrypt_cost,
            admin: AdminConfig {
                username: lookup("ADMIN_USERNAME")
                    .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
                password: lookup("ADMIN_PASSWORD")
                    .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
                email: lookup("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            },
        })
    }
}

fn parse_bcrypt_cost(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: "BCRYPT_COST".to_string(),
        reason,
    };

    let cost: u32 = raw
        .trim()
        .parse()
        .map_err(|e| invalid(format!("{raw:?} is not a number: {e}")))?;

    // bcrypt only accepts costs in this range
    if !(4..=31).contains(&cost) {
        return Err(invalid(format!("{cost} is outside 4..=31")));
    }

    Ok(cost)
}
