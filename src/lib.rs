//! Route inventory for web applications.
//!
//! Flattens a nested route table into one record per reachable endpoint:
//! path, HTTP methods, handler and bound schema.

pub mod config;
pub mod manifest;
pub mod observability;
pub mod report;
pub mod routing;
pub mod scan;

pub use config::AuditConfig;
pub use routing::{collect_routes, RouteRecord};
pub use scan::{scan_project, ScanReport};
