mod simulation;
mod clock;
mod sink;
mod driver;
pub mod startup;

pub use simulation::Simulation;
pub use clock::StepClock;
pub use sink::{RenderSink, Tint};
pub use driver::{Driver, RunState};
pub use startup::LaunchOptions;
