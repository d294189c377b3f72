pub mod error;
pub mod observation;
pub mod time;

pub use error::*;
pub use observation::*;
pub use time::*;
