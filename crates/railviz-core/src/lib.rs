//! Railviz Core - Domain types and rake data loading
//!
//! This crate provides the foundational types for the Railviz system:
//! - Rake/Wagon/Order records and the priority/shape enumerations
//! - Utilization bands for wagon load display
//! - Structured tooltip content synthesized from domain records
//! - JSON rake file loading and the built-in sample fixture

pub mod fixture;
pub mod load;
pub mod tooltip;
pub mod types;

pub use load::{load_rake_file, parse_rake, RakeFileError};
pub use tooltip::{order_tooltip, wagon_tooltip, TooltipContent, TooltipLine};
pub use types::{Dimensions, Order, OrderShape, Priority, Rake, UtilizationBand, Wagon};
