pub mod analysis;
pub mod annotation;
pub mod error;
pub mod inventory;
pub mod math;
pub mod scene;

pub use error::{PartscopeError, Result};
