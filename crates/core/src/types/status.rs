//! Order lifecycle status.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
///
/// A fixed, strictly ordered vocabulary. Every order starts at `Pending`;
/// `Served` is terminal. The ordering drives the customer-facing progress
/// indicator, so variant order here is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Placed by the customer, not yet picked up by the kitchen.
    #[default]
    Pending,
    /// First kitchen-visible state.
    Preparing,
    Cooking,
    Ready,
    /// Terminal state; the order leaves the active partition.
    Served,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Preparing,
        Self::Cooking,
        Self::Ready,
        Self::Served,
    ];

    /// Position of this status in the lifecycle sequence.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Progress-bar fill fraction in `0.0..=1.0`.
    ///
    /// `Pending` renders as 0%, `Served` as 100%.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // index is at most 4
    pub fn progress(self) -> f64 {
        self.index() as f64 / (Self::ALL.len() - 1) as f64
    }

    /// The next status in the sequence, or `None` at `Served`.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Whether this is the terminal state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Served
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pending => "Pending",
            Self::Preparing => "Preparing",
            Self::Cooking => "Cooking",
            Self::Ready => "Ready",
            Self::Served => "Served",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Preparing" => Ok(Self::Preparing),
            "Cooking" => Ok(Self::Cooking),
            "Ready" => Ok(Self::Ready),
            "Served" => Ok(Self::Served),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
