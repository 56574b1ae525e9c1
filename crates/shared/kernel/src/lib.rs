//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and owns config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use scriba_kernel::config::load_scriba_config;
//!
//! let cfg = load_scriba_config(Some("config/local")).unwrap_or_default();
//! assert!(!cfg.logging.level.is_empty());
//! ```
pub mod config;

pub use scriba_domain as domain;
