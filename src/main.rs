use std::process::ExitCode;
use std::time::Duration;

use chrono::Local;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use schulbib::db::{ConnectionOptions, establish_connection_pool_with};
use schulbib::domain::school_year::{current_school_year, school_year_choices};
use schulbib::settings::load_config;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let options = ConnectionOptions {
        busy_timeout: Duration::from_millis(server_config.busy_timeout_ms),
        ..ConnectionOptions::default()
    };
    let pool = match establish_connection_pool_with(&server_config.database_url, options) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to open database {}: {e}", server_config.database_url);
            return ExitCode::FAILURE;
        }
    };

    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(e) => {
            log::error!("Failed to get a database connection: {e}");
            return ExitCode::FAILURE;
        }
    };
    match conn.run_pending_migrations(MIGRATIONS) {
        Ok(applied) => log::info!("Applied {} pending migrations", applied.len()),
        Err(e) => {
            log::error!("Failed to run migrations: {e}");
            return ExitCode::FAILURE;
        }
    }

    let today = Local::now().date_naive();
    let choices = school_year_choices(today, server_config.school_year_choices);
    log::info!(
        "Current school year is {}; entry years offered: {}",
        current_school_year(today),
        choices
            .iter()
            .map(|(value, _)| value.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    ExitCode::SUCCESS
}
