pub mod interview;
pub mod job;
pub mod resume;
pub mod skill;

use serde::{Deserialize, Serialize};

/// Display tone a status maps to. The UI picks badge colors from this.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Info,
    Warning,
    Success,
    Danger,
    Neutral,
}

/// A categorical field with a closed set of values.
///
/// `ALL` fixes the reporting order for breakdowns, so a value with no records
/// still shows up with a zero count.
pub trait Category: Copy + Eq + Serialize + 'static {
    const ALL: &'static [Self];

    fn badge(self) -> BadgeTone {
        BadgeTone::Neutral
    }
}
