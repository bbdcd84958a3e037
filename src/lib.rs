//! smilseq - SMIL playlist to clip-sequence JSON service
//!
//! This library crate exposes configuration and the HTTP server for
//! integration testing. Translation itself lives in `smilseq-core`.

pub mod config;
pub mod server;
