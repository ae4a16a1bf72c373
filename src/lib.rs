pub mod choreography;
pub mod config;
pub mod construction;
pub mod error;
pub mod math;
pub mod motion;
pub mod path;
pub mod rolling;
pub mod star;

pub use error::{Result, StarrollError};
