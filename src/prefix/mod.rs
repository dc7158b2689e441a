/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod binary;
pub mod metric;

pub use binary::BinaryPrefix;
pub use metric::MetricPrefix;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A prefix attached to a single unit token: either a one-character
/// metric (decimal) prefix or a two-character binary prefix. The two
/// classes are disjoint in their symbol sets, which is what lets the
/// parser try one-character-then-two-character decomposition without
/// backtracking.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Prefix {
    Metric(MetricPrefix),
    Binary(BinaryPrefix),
}

impl Prefix {
    pub fn factor(&self) -> f64 {
        match self {
            Prefix::Metric(p) => p.factor(),
            Prefix::Binary(p) => p.factor(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Prefix::Metric(p) => p.symbol(),
            Prefix::Binary(p) => p.symbol(),
        }
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}
