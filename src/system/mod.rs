mod filter;
pub use filter::*;
mod signal;
pub use signal::*;
