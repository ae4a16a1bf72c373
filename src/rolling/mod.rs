//! Frame-by-frame rolling of the inner circle and whatever rides on it.

mod body;
mod step;

pub use body::{RollKind, RollingBody, RollingPhase, RollingState, MAX_RUN_TICKS};
pub use step::{roll_step, RollStep};
