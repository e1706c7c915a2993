//! Command-line and environment configuration.

use crate::fetch::Credentials;
use crate::tcl::{DEFAULT_TIMEZONE, TclConfig, resolve_timezone};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "grandlyon_board")]
#[command(about = "TCL arrival boards and Vélo'v availability over HTTP", long_about = None)]
pub struct Cli {
    /// Host to listen to
    #[arg(long, env = "LISTEN_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "LISTEN_PORT", default_value_t = 8888)]
    pub port: u16,

    /// Grand Lyon data portal username
    #[arg(short = 'u', long, env = "GRAND_LYON_USERNAME")]
    pub grand_lyon_username: String,

    /// Grand Lyon data portal password
    #[arg(short = 'p', long, env = "GRAND_LYON_PASSWORD", hide_env_values = true)]
    pub grand_lyon_password: String,

    /// Origin allowed to call the API from a browser
    #[arg(long, env = "CORS_ALLOWED_ORIGIN")]
    pub cors_allowed_origin: Option<String>,

    /// Timezone of the TCL passage timestamps
    #[arg(long, env = "TCL_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Seconds before an upstream request is abandoned
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 30)]
    pub upstream_timeout: u64,
}

impl Cli {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    pub fn tcl_config(&self) -> TclConfig {
        TclConfig {
            credentials: Credentials::new(&self.grand_lyon_username, &self.grand_lyon_password),
            timezone: resolve_timezone(&self.timezone),
        }
    }
}
