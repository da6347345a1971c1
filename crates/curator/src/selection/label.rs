//! Pick labels used in curated file names and mapping entries.

use std::fmt;

/// The role a curated image plays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PickLabel {
    RawWood,
    RoughShape,
    DefiningForms,
    Detailing,
    /// Hero shot from the final set, numbered from 1.
    Finished(usize),
    /// Close-up from the final set, numbered from 1.
    Detail(usize),
    /// Cross-project highlight, numbered from 1.
    Best(usize),
}

impl PickLabel {
    /// The four process phases in export order.
    pub const PHASES: [PickLabel; 4] = [
        PickLabel::RawWood,
        PickLabel::RoughShape,
        PickLabel::DefiningForms,
        PickLabel::Detailing,
    ];

    /// Position through the process sequence at which each phase is sampled.
    pub fn phase_fraction(&self) -> Option<f64> {
        match self {
            PickLabel::RawWood => Some(0.0),
            PickLabel::RoughShape => Some(0.18),
            PickLabel::DefiningForms => Some(0.45),
            PickLabel::Detailing => Some(0.75),
            _ => None,
        }
    }
}

impl fmt::Display for PickLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickLabel::RawWood => write!(f, "RawWood"),
            PickLabel::RoughShape => write!(f, "RoughShape"),
            PickLabel::DefiningForms => write!(f, "DefiningForms"),
            PickLabel::Detailing => write!(f, "Detailing"),
            PickLabel::Finished(n) => write!(f, "Finished_{}", n),
            PickLabel::Detail(n) => write!(f, "Detail_{}", n),
            PickLabel::Best(n) => write!(f, "Best_{}", n),
        }
    }
}
