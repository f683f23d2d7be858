mod state;
mod ui;

pub use state::*;
pub(crate) use ui::placeholder;
