//! SoilWatch library.
//!
//! Exposes the garden rules, the application service and its adapters
//! for the binary and for integration testing.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod channels;
pub mod config;
pub mod error;
pub mod events;
pub mod garden;
pub mod runtime;
pub mod scheduler;
