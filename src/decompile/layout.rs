//! Deterministic vertical layout for decompiled nodes.

use serde::{Deserialize, Serialize};

use crate::parse::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub x: f64,
    pub y_start: f64,
    pub y_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            x: 100.0,
            y_start: 120.0,
            y_step: 100.0,
        }
    }
}

impl LayoutConfig {
    /// Position of the node at `index` in rank order: one column, top to bottom.
    pub fn position(&self, index: usize) -> Position {
        Position {
            x: self.x,
            y: self.y_start + index as f64 * self.y_step,
        }
    }
}

/// Stable sort by rank; items that tie keep their relative order.
pub fn order_by_rank<T>(mut items: Vec<T>, rank: impl Fn(&T) -> usize) -> Vec<T> {
    items.sort_by_key(|item| rank(item));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_grow_downwards() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.position(0), Position { x: 100.0, y: 120.0 });
        assert_eq!(layout.position(3), Position { x: 100.0, y: 420.0 });
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let layout: LayoutConfig = serde_json::from_str(r#"{"yStep": 50}"#).unwrap();
        assert_eq!(layout.x, 100.0);
        assert_eq!(layout.position(2).y, 220.0);
    }

    #[test]
    fn ties_keep_input_order() {
        let ordered = order_by_rank(vec![("b", 1), ("a", 0), ("c", 1)], |(_, r)| *r);
        assert_eq!(ordered, vec![("a", 0), ("b", 1), ("c", 1)]);
    }
}
