//! `flightlog` - An interactive record manager for flight entries
//!
//! This library provides the flight record model, the in-memory flight log,
//! age-based selection, JSON persistence, table rendering and the interactive
//! command session that ties them together.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod query;
pub mod record;
pub mod shell;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::Record;
pub use shell::{Command, Session, State};
pub use store::FlightLog;
