//! Core library components.
//!
//! Parsing, lookup and dispatch, plus the adapters for the external programs
//! they rely on.

pub mod cipher;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod domain;
pub mod lookup;
pub mod parser;
pub mod store;
