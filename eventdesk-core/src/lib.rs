//! Core types for eventdesk.
//!
//! - `Event` and `Category`, the event record
//! - `form` for turning raw user input into a validated `Event`
//! - `store` for the ordered in-memory event list
//! - `export` for CSV serialization
//! - `config` for the optional settings file

pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod form;
pub mod store;

pub use error::{EventDeskError, EventDeskResult, Field};
pub use event::{Category, Event};
pub use form::EventForm;
pub use store::{Entry, EventStore};
