// src/config.rs

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the storage area persists into. `None` keeps everything
    /// in memory (useful for tests and throwaway sessions).
    pub data_dir: Option<PathBuf>,
    /// Email that gets the admin role at signup. There is no self-service
    /// path to admin, so the first admin has to be bootstrapped here.
    pub admin_email: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            data_dir: env::var("VOLUNTEER_LINK_DATA").ok().map(PathBuf::from),
            admin_email: env::var("VOLUNTEER_LINK_ADMIN").ok(),
        }
    }
}
