//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the business rules for the SoilWatch controller:
//! command interpretation, trigger handling, and event emission.  All
//! interaction with the environment happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without a
//! network or a clock.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
