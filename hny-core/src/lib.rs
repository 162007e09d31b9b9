//! hny Core
//!
//! Shared types for the hny observability CLI.
//!
//! This crate contains:
//! - Domain types: Resources as returned by the API (Dataset, Board, QueryResult, etc.)
//! - DTOs: Request payloads and wire envelopes used by the client

pub mod domain;
pub mod dto;
