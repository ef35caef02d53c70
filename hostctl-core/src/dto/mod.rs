//! Data Transfer Objects for the hosting platform API
//!
//! Request bodies sent by the client and the envelopes wrapped around
//! responses (collections, asynchronous operation handles).

pub mod application;
pub mod code;
pub mod collection;
pub mod cron;
pub mod database;
pub mod domain;
pub mod environment;
pub mod operation;
pub mod team;
