use crate::rashinban::{self, auth::Credentials, SessionState, UploadReceipt};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub credentials: Credentials,
    pub allow_bypass: bool,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    if args.allow_bypass {
        warn!(
            "X-Bypass-Mode is honored: any caller setting it skips bearer token checks. \
             Start with --allow-bypass false outside development"
        );
    }

    let state = Arc::new(SessionState::new(args.credentials, args.allow_bypass));

    rashinban::new(args.port, state, Arc::new(UploadReceipt)).await
}

fn log_startup_args(args: &Args) {
    let (username, _) = args.credentials.expected_credentials();
    let entries = [
        ("listen", format!("tcp:[::]:{}", args.port)),
        ("username", username.to_string()),
        ("password", "REDACTED".to_string()),
        ("allow_bypass", args.allow_bypass.to_string()),
    ];
    log_entries("Startup configuration", &entries);
}

fn log_entries(title: &str, entries: &[(&str, String)]) {
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!("{}\n\n{title}:", rashinban_banner());
    for (key, value) in entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    info!("{message}");
}

fn rashinban_banner() -> String {
    let short_hash = short_commit(crate::GIT_COMMIT_HASH);
    RASHINBAN_BANNER.replace(
        "{VERSION}",
        &format!(" - {} - {}", env!("CARGO_PKG_VERSION"), short_hash),
    )
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed[..7].to_string()
    } else {
        trimmed.to_string()
    }
}

const RASHINBAN_BANNER: &str = r"
      N
      |
  W --+-- E   R A S H I N B A N {VERSION}
      |
      S";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_commit_truncates_to_seven() {
        assert_eq!(short_commit("0123456789abcdef"), "0123456");
        assert_eq!(short_commit(" abc "), "abc");
        assert_eq!(short_commit("unknown"), "unknown");
    }

    #[test]
    fn banner_includes_version() {
        assert!(rashinban_banner().contains(env!("CARGO_PKG_VERSION")));
        assert!(!rashinban_banner().contains("{VERSION}"));
    }
}
