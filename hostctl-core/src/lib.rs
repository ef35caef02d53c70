//! hostctl Core
//!
//! Core types for the hostctl command-line client.
//!
//! This crate contains:
//! - Domain types: Entities returned by the hosting platform (Application, Environment, etc.)
//! - DTOs: Request bodies and response envelopes exchanged with the API

pub mod domain;
pub mod dto;
