//! Core domain types
//!
//! This module contains the entities returned by the hosting platform's API.
//! They are validated at deserialization time so that business logic never
//! has to deal with missing fields.

pub mod account;
pub mod application;
pub mod code;
pub mod cron;
pub mod database;
pub mod environment;
pub mod hostname;
pub mod log;
pub mod notification;
pub mod organization;
pub mod team;
