mod error;
pub use error::*;
mod helpers;
pub use helpers::*;
mod logger;
pub use logger::*;
mod utils;
pub use utils::*;
