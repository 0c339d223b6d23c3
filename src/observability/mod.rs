//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (manifest discovery, excluded routes, watch events)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, filtered by RUST_LOG or config)
//! ```

pub mod logging;
