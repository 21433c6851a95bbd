//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters.  Nothing here opens a socket.

mod mock_hw;
mod remote_fallback_tests;
mod scheduler_flow_tests;
