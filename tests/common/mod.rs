#![allow(dead_code)]

use bigdecimal::BigDecimal;
use serde_json::Value;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{
    env,
    io::{self, Write},
    str::FromStr,
    time::Duration,
};
use uuid::Uuid;

use workday_tracker::database::{
    init_database,
    repositories::{BonusRepository, PaymentRepository, UserRepository, WorkDayRepository},
};
use workday_tracker::services::auth::issue_token;
use workday_tracker::{AuthService, BookkeepingService, Config};

pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Services wired the same way the server wires them
pub struct TestContext {
    pub pool: PgPool,
    pub config: Config,
    pub auth_service: AuthService,
    pub bookkeeping_service: BookkeepingService,
}

impl TestContext {
    fn from_pool(pool: PgPool, config: Config) -> Self {
        let user_repository = UserRepository::new(pool.clone());
        let auth_service = AuthService::new(user_repository.clone(), config.clone());
        let bookkeeping_service = BookkeepingService::new(
            user_repository,
            WorkDayRepository::new(pool.clone()),
            PaymentRepository::new(pool.clone()),
            BonusRepository::new(pool.clone()),
            config.default_daily_salary.clone(),
        );

        TestContext {
            pool,
            config,
            auth_service,
            bookkeeping_service,
        }
    }

    /// Pool that never connects unless a query runs. Enough for requests
    /// rejected by authentication or payload validation.
    pub fn lazy() -> Self {
        setup_test_env();
        let config = Config::test_config();
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(1))
            .connect_lazy(&config.database_url)
            .expect("test database url parses");

        Self::from_pool(pool, config)
    }

    /// Migrated database from `TEST_DATABASE_URL`, or `None` when it is not set
    pub async fn with_database() -> Option<Self> {
        setup_test_env();
        let Ok(database_url) = env::var("TEST_DATABASE_URL") else {
            report_skip();
            return None;
        };
        let config = Config {
            database_url: database_url.clone(),
            ..Config::test_config()
        };

        let pool = init_database(&database_url, 5)
            .await
            .expect("test database is reachable");

        Some(Self::from_pool(pool, config))
    }

    pub fn token_for(&self, user_id: Uuid) -> String {
        issue_token(user_id, "test-user", &self.config).expect("token signs")
    }

    pub fn bearer(&self, user_id: Uuid) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token_for(user_id)))
    }
}

/// Written to stderr directly so the harness does not capture it
fn report_skip() {
    let thread = std::thread::current();
    let test_name = thread.name().unwrap_or("database test");
    let _ = writeln!(
        io::stderr(),
        "Skipping {} - TEST_DATABASE_URL is not set",
        test_name
    );
    log::warn!("Skipping {}: TEST_DATABASE_URL is not set", test_name);
}

/// Builds the full API around a `TestContext`
#[allow(unused_macros)]
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.config.clone()))
                .app_data(actix_web::web::Data::new($ctx.auth_service.clone()))
                .app_data(actix_web::web::Data::new($ctx.bookkeeping_service.clone()))
                .configure(workday_tracker::routes::configure),
        )
        .await
    };
}
#[allow(unused_imports)]
pub(crate) use init_app;

/// Reads a money value whether it was serialized as a string or a number
pub fn money(value: &Value) -> BigDecimal {
    match value {
        Value::String(text) => BigDecimal::from_str(text).expect("decimal string"),
        Value::Number(number) => BigDecimal::from_str(&number.to_string()).expect("decimal number"),
        other => panic!("expected a money value, got {}", other),
    }
}

pub fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).expect("valid decimal literal")
}

pub fn unique_username() -> String {
    use fake::Fake;
    use fake::faker::internet::en::Username;

    let name: String = Username().fake();
    format!("{}_{}", name, &Uuid::new_v4().simple().to_string()[..8])
}
