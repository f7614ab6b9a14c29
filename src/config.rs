use anyhow::{Context, Result, anyhow};
use bigdecimal::BigDecimal;
use std::env;
use std::str::FromStr;

const DEFAULT_DAILY_SALARY: &str = "3500.00";
const DEFAULT_JWT_SECRET: &str = "your-super-secret-jwt-key-change-this-in-production-12345";

/// A username/password pair provisioned at startup
#[derive(Debug, Clone, PartialEq)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expiration_days: i64,
    pub bcrypt_cost: u32,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub client_base_url: String,
    pub default_daily_salary: BigDecimal,
    pub seed_users: Vec<SeedUser>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        let default_daily_salary = env::var("DEFAULT_DAILY_SALARY")
            .unwrap_or_else(|_| DEFAULT_DAILY_SALARY.to_string());
        let default_daily_salary = BigDecimal::from_str(default_daily_salary.trim())
            .with_context(|| format!("DEFAULT_DAILY_SALARY is not a decimal: {default_daily_salary}"))?;

        if default_daily_salary < BigDecimal::from(0) {
            return Err(anyhow!("DEFAULT_DAILY_SALARY must not be negative"));
        }
        if default_daily_salary.normalized().fractional_digit_count() > 2 {
            return Err(anyhow!("DEFAULT_DAILY_SALARY must be in whole cents"));
        }

        let seed_users = match env::var("SEED_USERS") {
            Ok(raw) => parse_seed_users(&raw)?,
            Err(_) => Vec::new(),
        };

        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/workday_tracker".to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            jwt_expiration_days: env::var("JWT_EXPIRATION_DAYS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|cost| cost.parse().ok())
                .unwrap_or(bcrypt::DEFAULT_COST),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            client_base_url: env::var("CLIENT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            default_daily_salary,
            seed_users,
        })
    }

    /// Fixed configuration for tests; never touches the environment
    pub fn test_config() -> Self {
        Config {
            database_url: "postgres://localhost:5432/workday_tracker_test".to_string(),
            database_max_connections: 1,
            jwt_secret: "test-jwt-secret-key-that-is-long-enough".to_string(),
            jwt_expiration_days: 1,
            bcrypt_cost: 4,
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            client_base_url: "http://localhost:3000".to_string(),
            default_daily_salary: BigDecimal::from(3500),
            seed_users: Vec::new(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Checks that only make sense once the environment is known
    pub fn validate(&self) -> Result<()> {
        if self.is_production() && self.jwt_secret == DEFAULT_JWT_SECRET {
            return Err(anyhow!("JWT_SECRET must be set in production"));
        }

        if self.jwt_secret == DEFAULT_JWT_SECRET {
            log::warn!("JWT_SECRET is not set, using the built-in development secret");
        }

        Ok(())
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parses `name:password` pairs separated by commas. Blank entries are skipped.
pub fn parse_seed_users(raw: &str) -> Result<Vec<SeedUser>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (username, password) = entry
                .split_once(':')
                .ok_or_else(|| anyhow!("SEED_USERS entry '{entry}' is not in name:password form"))?;
            let username = username.trim();
            if username.is_empty() || password.is_empty() {
                return Err(anyhow!("SEED_USERS entry '{entry}' has an empty name or password"));
            }
            Ok(SeedUser {
                username: username.to_string(),
                password: password.to_string(),
            })
        })
        .collect()
}
