use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// ISUP grade group, 1–5. Zero means no tumor grade applies.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct GradeGroup(u8);

impl GradeGroup {
    pub const NONE: GradeGroup = GradeGroup(0);
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::InvalidGradeGroup(value));
        }
        Ok(GradeGroup(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_graded(self) -> bool {
        self.0 > 0
    }

    /// Grade group derived from a Gleason score.
    ///
    /// `sum` is the total score; `primary` disambiguates 3+4 from 4+3.
    /// A sum of 7 from any other split (2+5, 5+2) falls into group 5.
    pub fn from_gleason(primary: u8, sum: u8) -> Self {
        let group = match (primary, sum) {
            (_, 0..=6) => 1,
            (3, 7) => 2,
            (4, 7) => 3,
            (_, 8) => 4,
            _ => 5,
        };
        GradeGroup(group)
    }

    /// Representative Gleason sum for display (ungraded reads as 6).
    pub fn gleason_sum(self) -> u8 {
        match self.0 {
            2 | 3 => 7,
            4 => 8,
            5 => 9,
            _ => 6,
        }
    }
}

impl TryFrom<u8> for GradeGroup {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GradeGroup::new(value)
    }
}

impl From<GradeGroup> for u8 {
    fn from(group: GradeGroup) -> Self {
        group.0
    }
}

impl fmt::Display for GradeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
