//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements          | Connects to                 |
//! |---------------|---------------------|-----------------------------|
//! | `simulator`   | SensorPort          | In-process drift rule       |
//! |               | ActuatorPort        | (no-op, debug log)          |
//! | `remote`      | SensorPort          | Station `GET /data`         |
//! |               | ActuatorPort        | Station `POST /api/...`     |
//! | `http`        | HttpTransport       | reqwest blocking client     |
//! | `log_sink`    | EventSink           | `log` facade                |
//! | `config_file` | ConfigPort          | JSON file on disk           |
//! | `console`     | (command producer)  | stdin, command channel      |
//! | `time`        | (clock)             | Host monotonic + wall clock |

pub mod config_file;
pub mod console;
#[cfg(feature = "remote")]
pub mod http;
pub mod log_sink;
pub mod remote;
pub mod simulator;
pub mod time;
