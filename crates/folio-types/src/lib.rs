pub mod catalog;
pub mod domain;
pub mod error;

pub use catalog::*;
pub use domain::*;
pub use error::{Error, Result};
