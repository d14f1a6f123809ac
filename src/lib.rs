//! Core library for the `snipe` CLI.
//!
//! `snipe` replays a raw HTTP request captured by an intercepting proxy,
//! substituting wordlist payloads for a marker token. The library exposes the
//! building blocks the binary is made of: CLI argument types, configuration,
//! the raw request parser, the marker substitution engine, the dispatcher and
//! the driver that ties them together.
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod http;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
