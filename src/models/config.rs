use serde::Deserialize;

use crate::domain::school_year::DEFAULT_SCHOOL_YEAR_CHOICES;

fn default_school_year_choices() -> usize {
    DEFAULT_SCHOOL_YEAR_CHOICES
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

/// Configuration options specific to the school library backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// How many school years are offered as borrower entry years.
    #[serde(default = "default_school_year_choices")]
    pub school_year_choices: usize,
    /// Milliseconds a writer waits on a locked database.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}
