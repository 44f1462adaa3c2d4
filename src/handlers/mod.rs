pub mod fallback;
pub mod health;
pub mod openapi;
pub mod root;

pub use fallback::*;
pub use health::*;
pub use openapi::*;
pub use root::*;
