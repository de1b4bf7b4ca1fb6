//! Find the Elgato Key Light accessories that Control Center has been set up with.
//!
//! ```no_run
//! for accessory in keylight_discover::discover() {
//!     println!("Got {} at {}", accessory.name(), accessory.address());
//! }
//! ```
#[macro_use]
extern crate serde_derive;

pub mod datatypes;
pub mod discovery;
pub mod error;
mod query;

#[cfg(feature = "async")]
pub mod tokio;

pub use crate::{datatypes::Accessory, discovery::discover};
