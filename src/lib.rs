//! # kvbench
//!
//! Write and read latency measurement for embedded key-value stores:
//! - Random fixed-length keys and values from a seedable generator
//! - Per-operation wall-clock timing of synchronous put/get calls
//! - Mean and P90 (sorted-index lookup) per phase
//!
//! ## Run Overview
//!
//! ```text
//! ┌──────────┐   ┌─────────────┐   ┌────────────┐   ┌────────────────┐   ┌────────┐
//! │   Open   │──▶│ Write phase │──▶│ Read phase │──▶│ Combined phase │──▶│ Report │
//! └──────────┘   └──────┬──────┘   └─────┬──────┘   └───────┬────────┘   └────────┘
//!                       │ keys           │ random keys      │ both
//!                       ▼                ▼                  ▼
//!                ┌───────────────────────────────────────────────┐
//!                │                   Key Pool                    │
//!                └───────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod workload;
pub mod store;
pub mod stats;
pub mod driver;
pub mod report;
pub mod app;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BenchError, Result};
pub use config::Config;
pub use driver::{BenchReport, Driver, Phase, PhaseResult};
pub use store::{KvStore, MemoryStore, SledStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvbench
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
