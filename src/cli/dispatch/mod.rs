use crate::cli::{
    actions::{server::Args, Action},
    commands::{ARG_ALLOW_BYPASS, ARG_PASSWORD, ARG_PORT, ARG_USERNAME},
};
use crate::rashinban::auth::Credentials;
use anyhow::{Context, Result};
use secrecy::SecretString;

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8000);

    let username = matches
        .get_one::<String>(ARG_USERNAME)
        .cloned()
        .context("missing required argument: --username")?;
    let password = matches
        .get_one::<String>(ARG_PASSWORD)
        .cloned()
        .map(SecretString::from)
        .context("missing required argument: --password")?;

    let allow_bypass = matches
        .get_one::<bool>(ARG_ALLOW_BYPASS)
        .copied()
        .unwrap_or(true);

    Ok(Action::Server(Args {
        port,
        credentials: Credentials::new(username, password),
        allow_bypass,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn handler_builds_server_action() -> Result<()> {
        let matches = commands::new().try_get_matches_from(vec![
            "rashinban",
            "--port",
            "9000",
            "--username",
            "analyst",
            "--password",
            "s3cret",
            "--allow-bypass",
            "false",
        ])?;

        let Action::Server(args) = handler(&matches)?;
        assert_eq!(args.port, 9000);
        assert!(!args.allow_bypass);

        let (username, password) = args.credentials.expected_credentials();
        assert_eq!(username, "analyst");
        assert_eq!(password.expose_secret(), "s3cret");
        Ok(())
    }
}
