//! HTTP gateway for the SDA admin tool.
//!
//! Exposes the ingest, accession and dataset-mapping workflows and the
//! archive public key as JSON endpoints. Each request becomes at most one
//! `sda-admin` invocation.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
