use anyhow::{Context, Result};
use clap::{Arg, Command};

pub const ARG_JWT_SECRET: &str = "jwt-secret";
pub const ARG_ENVIRONMENT: &str = "environment";
pub const ARG_CLIENT_URL: &str = "client-url";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_JWT_SECRET)
                .long("jwt-secret")
                .help("Secret used to sign and verify session tokens")
                .env("COURIER_JWT_SECRET")
                .required(true),
        )
        .arg(
            Arg::new(ARG_ENVIRONMENT)
                .long("environment")
                .help("Deployment environment name, only \"development\" disables the Secure cookie flag")
                .env("COURIER_ENV")
                .default_value("development"),
        )
        .arg(
            Arg::new(ARG_CLIENT_URL)
                .long("client-url")
                .help("Frontend origin allowed to send credentialed requests")
                .env("COURIER_CLIENT_URL")
                .default_value("http://localhost:5173"),
        )
}

pub struct Options {
    pub jwt_secret: String,
    pub environment: String,
    pub client_url: String,
}

impl Options {
    /// # Errors
    /// Returns an error if a required argument is missing.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        Ok(Self {
            jwt_secret: matches
                .get_one::<String>(ARG_JWT_SECRET)
                .cloned()
                .context("missing required argument: --jwt-secret")?,
            environment: matches
                .get_one::<String>(ARG_ENVIRONMENT)
                .cloned()
                .unwrap_or_else(|| "development".to_string()),
            client_url: matches
                .get_one::<String>(ARG_CLIENT_URL)
                .cloned()
                .unwrap_or_else(|| "http://localhost:5173".to_string()),
        })
    }
}
