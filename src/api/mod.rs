//! HTTP API
//!
//! Client functions for the AirMap REST API.

pub mod client;

pub use client::*;
