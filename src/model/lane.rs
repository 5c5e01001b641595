use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Identified, Item, TimelineLane};

/// A track holding an ordered list of time-ranged items.
///
/// Insertion order is display order. Lanes are siblings: they share the
/// timeline's axis and overall range but have no relationship to each
/// other beyond that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    /// Unique identifier
    pub id: Uuid,
    /// Display name (e.g., "Narration", "Camera 2")
    pub name: String,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Optional accent color (CSS value) used by the default item rendering.
    #[serde(default)]
    pub color: Option<String>,
}

impl Lane {
    /// Create an empty lane.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            items: Vec::new(),
            color: None,
        }
    }

    /// Create a lane pre-populated with items.
    pub fn with_items(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::new(name)
        }
    }

    /// Set the accent color used by the default rendering.
    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Append an item at the end of the display order.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }
}

impl Identified for Lane {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TimelineLane for Lane {
    type Item = Item;

    fn items(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimeRange;

    #[test]
    fn test_push_preserves_order() {
        let mut lane = Lane::new("Audio");
        let first = Item::new(TimeRange::new(0.0, 1.0).unwrap());
        let second = Item::new(TimeRange::new(1.0, 2.0).unwrap());
        let first_id = first.id;
        lane.push(first);
        lane.push(second);
        assert_eq!(lane.items.len(), 2);
        assert_eq!(lane.items[0].id, first_id);
    }

    #[test]
    fn test_lane_serialization() {
        let lane = Lane::with_items(
            "Video",
            vec![Item::labelled(TimeRange::new(0.0, 4.0).unwrap(), "Opening")],
        )
        .colored("#22c55e");
        let json = serde_json::to_string_pretty(&lane).unwrap();
        let parsed: Lane = serde_json::from_str(&json).unwrap();
        assert_eq!(lane, parsed);
    }
}
