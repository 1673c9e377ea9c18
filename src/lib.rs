//! # Rashinban (CSV Business Analysis Backend)
//!
//! `rashinban` ingests CSV uploads and hands them to an analysis collaborator.
//! Every analysis call sits behind a minimal bearer-token session gate.
//!
//! ## Sessions
//!
//! A client exchanges the configured username/password for an opaque token at
//! `POST /login` and presents it as `Authorization: Bearer <token>` on
//! protected routes. `POST /logout` revokes it. Tokens live only in process
//! memory: a restart invalidates every session, and tokens never expire on
//! their own.
//!
//! ## Bypass Mode
//!
//! A request carrying `X-Bypass-Mode: 1|true|yes|on` skips the bearer check
//! entirely. This is a configuration risk: anyone able to set the header is
//! admitted. Disable it outside development with `--allow-bypass false`.

pub mod cli;
pub mod rashinban;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
