mod plot;
pub use plot::*;
mod report;
pub use report::*;
