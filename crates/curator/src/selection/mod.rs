//! Representative frame selection.

mod label;
mod plan;
mod selector;

pub use label::PickLabel;
pub use plan::{DETAIL_FRACTIONS, SelectionPlan, Slot};
pub use selector::{pick_by_fraction, spaced_picks};
