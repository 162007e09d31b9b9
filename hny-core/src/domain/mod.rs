//! Core domain types
//!
//! This module contains the resource structures returned by the observability API.
//! They are shared between the HTTP client (deserialization) and the CLI (display).

pub mod auth;
pub mod board;
pub mod dataset;
pub mod environment;
pub mod key;
pub mod marker;
pub mod query;
pub mod slo;
