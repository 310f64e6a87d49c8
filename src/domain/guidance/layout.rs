//! Flow layout - spatial placement for the procedural flow diagram.
//!
//! Procedural flows are linear, so the layout is a straight row: stage `i`
//! sits at `x = base_x + i * spacing` with constant `y` and `z`, and edges
//! join each stage to its successor. The result depends only on the number
//! of stages.

use serde::Serialize;

/// A point in the diagram's 3-D scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Directed connection from one stage to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

/// Node positions and connecting edges for one stage list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageLayout {
    /// One position per stage, in stage order.
    pub positions: Vec<Position>,
    /// `(i, i + 1)` pairs; empty for zero or one stage.
    pub edges: Vec<Edge>,
}

impl StageLayout {
    /// Number of laid-out stages.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Places stages along a horizontal line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayoutEngine {
    base_x: f32,
    spacing: f32,
    y: f32,
    z: f32,
}

impl Default for FlowLayoutEngine {
    /// First stage at x = -2, one unit apart, centered on the y/z origin.
    fn default() -> Self {
        Self {
            base_x: -2.0,
            spacing: 1.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl FlowLayoutEngine {
    /// Creates an engine with explicit offsets.
    pub fn new(base_x: f32, spacing: f32, y: f32, z: f32) -> Self {
        Self {
            base_x,
            spacing,
            y,
            z,
        }
    }

    /// Lays out a stage list.
    pub fn layout<S: AsRef<str>>(&self, stages: &[S]) -> StageLayout {
        self.layout_for_count(stages.len())
    }

    /// Lays out `count` stages.
    pub fn layout_for_count(&self, count: usize) -> StageLayout {
        let positions = (0..count)
            .map(|i| Position {
                x: self.base_x + i as f32 * self.spacing,
                y: self.y,
                z: self.z,
            })
            .collect();

        let edges = (1..count).map(|to| Edge { from: to - 1, to }).collect();

        StageLayout { positions, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn five_stages_match_default_row() {
        let layout = FlowLayoutEngine::default().layout(&[
            "Legal Notice",
            "Waiting Period",
            "Case Filing",
            "Court Hearing",
            "Final Order",
        ]);

        let xs: Vec<f32> = layout.positions.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert!(layout.positions.iter().all(|p| p.y == 0.0 && p.z == 0.0));
        assert_eq!(
            layout.edges,
            vec![
                Edge { from: 0, to: 1 },
                Edge { from: 1, to: 2 },
                Edge { from: 2, to: 3 },
                Edge { from: 3, to: 4 },
            ]
        );
    }

    #[test]
    fn single_stage_has_no_edges() {
        let layout = FlowLayoutEngine::default().layout(&["Resolution"]);
        assert_eq!(layout.len(), 1);
        assert!(layout.edges.is_empty());
    }

    #[test]
    fn empty_stage_list_yields_empty_layout() {
        let stages: [&str; 0] = [];
        let layout = FlowLayoutEngine::default().layout(&stages);
        assert!(layout.is_empty());
        assert!(layout.edges.is_empty());
    }

    #[test]
    fn custom_offsets_are_applied() {
        let engine = FlowLayoutEngine::new(0.5, 2.0, -1.0, 3.0);
        let layout = engine.layout_for_count(3);

        assert_eq!(layout.positions[2], Position { x: 4.5, y: -1.0, z: 3.0 });
    }

    #[test]
    fn layout_depends_only_on_count() {
        let engine = FlowLayoutEngine::default();
        assert_eq!(engine.layout(&["a", "b"]), engine.layout(&["Mediation", "Judgment"]));
    }

    proptest! {
        #[test]
        fn layout_sizes_and_determinism(stages in proptest::collection::vec(".{1,12}", 0..20)) {
            let engine = FlowLayoutEngine::default();
            let first = engine.layout(&stages);
            let second = engine.layout(&stages);

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.positions.len(), stages.len());
            prop_assert_eq!(first.edges.len(), stages.len().saturating_sub(1));
            for (i, edge) in first.edges.iter().enumerate() {
                prop_assert_eq!(*edge, Edge { from: i, to: i + 1 });
            }
        }
    }
}
