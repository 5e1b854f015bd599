mod air;
mod dashboard;
mod weather;

pub use air::*;
pub use dashboard::*;
pub use weather::*;
