//! Telemetry data model and the plumbing that moves samples into the views.

mod grid;
mod inbox;
mod keyboard;
mod rolling;
mod sample;
mod source;
mod ticker;

pub use grid::*;
pub use inbox::*;
pub use keyboard::*;
pub use rolling::*;
pub use sample::*;
pub use source::*;
pub use ticker::*;
