use clap::{builder::BoolishValueParser, Arg, ArgAction, Command};

pub const ARG_USERNAME: &str = "username";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_ALLOW_BYPASS: &str = "allow-bypass";

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password123";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_USERNAME)
                .long("username")
                .help("Username accepted by POST /login")
                .default_value(DEFAULT_USERNAME)
                .env("RASHINBAN_USERNAME"),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .long("password")
                .help("Password accepted by POST /login")
                .default_value(DEFAULT_PASSWORD)
                .env("RASHINBAN_PASSWORD")
                .hide_env_values(true)
                .hide_default_value(true),
        )
        .arg(
            Arg::new(ARG_ALLOW_BYPASS)
                .long("allow-bypass")
                .help("Honor the X-Bypass-Mode header (skips bearer token checks)")
                .long_help(
                    "Honor the X-Bypass-Mode header. Any caller able to set the header to 1, true, yes or on skips bearer token checks entirely. Disable outside development.",
                )
                .default_value("true")
                .env("RASHINBAN_ALLOW_BYPASS")
                .action(ArgAction::Set)
                .value_parser(BoolishValueParser::new()),
        )
}
