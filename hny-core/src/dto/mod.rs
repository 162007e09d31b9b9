//! Data Transfer Objects
//!
//! Request payloads sent to the API and wire envelopes that are unwrapped into
//! domain types. Request DTOs carry only writable fields, so server-assigned
//! values (ids, timestamps) are never sent back.

pub mod dataset;
pub mod jsonapi;
pub mod marker;
pub mod query;
