//! Services that compose the ports into collection cycles.

mod collector;
mod health;

pub use collector::SbdHealthCollector;
pub use health::probe_all;
