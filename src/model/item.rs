use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Identified, Ranged, TimeRange};

/// A time-ranged entry displayed inside a lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: Uuid,
    /// The half-open range this item spans.
    pub range: TimeRange,
    /// Optional user-facing label shown by the default rendering.
    #[serde(default)]
    pub label: Option<String>,
}

impl Item {
    /// Create a new item spanning `range`.
    pub fn new(range: TimeRange) -> Self {
        Self {
            id: Uuid::new_v4(),
            range,
            label: None,
        }
    }

    /// Create a labelled item.
    pub fn labelled(range: TimeRange, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            range,
            label: Some(label.into()),
        }
    }

    /// True when this item is an instantaneous event.
    pub fn is_instant(&self) -> bool {
        self.range.is_empty()
    }
}

impl Identified for Item {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Ranged for Item {
    fn range(&self) -> TimeRange {
        self.range
    }
}
