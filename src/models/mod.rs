pub mod fuel;
pub mod log;
pub mod stats;
pub mod trip;

pub use fuel::*;
pub use log::*;
pub use stats::*;
pub use trip::*;
