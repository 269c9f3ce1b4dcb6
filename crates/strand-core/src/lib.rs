pub mod error;
pub mod tolerance;

pub use error::{Result, StrandError};
pub use tolerance::Tolerance;
