//! Secondary ordering for recommendations with equal mutual counts.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::entities::Recommendation;
use crate::error::DomainError;

/// How candidates with the same mutual count are ordered.
///
/// Recommendations are always ranked by mutual count descending. `StoreDefault`
/// leaves ties in whatever order the graph store produces them, which is not
/// guaranteed to be stable across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    #[default]
    StoreDefault,
    UserIdAscending,
}

impl TieBreak {
    /// Ranking comparator matching the order the repository asks the store for.
    ///
    /// Under `StoreDefault`, ties compare `Equal` so a stable sort keeps the
    /// incoming order.
    pub fn compare(self, a: &Recommendation, b: &Recommendation) -> Ordering {
        b.mutual.cmp(&a.mutual).then_with(|| match self {
            TieBreak::StoreDefault => Ordering::Equal,
            TieBreak::UserIdAscending => a.user_id.cmp(&b.user_id),
        })
    }

    /// Whether `recommendations` are already in ranked order.
    pub fn is_ranked(self, recommendations: &[Recommendation]) -> bool {
        recommendations
            .windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::StoreDefault => write!(f, "store-default"),
            TieBreak::UserIdAscending => write!(f, "user-id-asc"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "store-default" | "store_default" | "default" => Ok(TieBreak::StoreDefault),
            "user-id-asc" | "user_id_asc" | "user-id-ascending" => Ok(TieBreak::UserIdAscending),
            other => Err(DomainError::parse(format!("Unknown tie-break: {other}"))),
        }
    }
}
