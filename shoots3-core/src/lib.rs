#![doc = "shoots3-core: core logic library for shoots3."]

//! This crate holds everything `shoot` does apart from talking to a real
//! bucket and parsing the command line: key generation, content sniffing,
//! option resolution and the upload flow itself.
//!
//! # Usage
//! Implement [`contract::ObjectStore`] for a storage backend and pass it to
//! [`shoot::shoot`] together with a resolved [`config::ShootConfig`] and a
//! [`payload::Payload`].

pub mod config;
pub mod contract;
pub mod error;
pub mod keygen;
pub mod payload;
pub mod shoot;
pub mod sniff;

pub use error::ShootError;
