pub mod error;
pub mod health;
pub mod root;

pub use error::*;
pub use health::*;
pub use root::*;
