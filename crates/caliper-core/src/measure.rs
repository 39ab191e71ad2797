//! Measurement derivation for captured shapes.
//!
//! Everything here is a pure function of the finalized shape list and is
//! recomputed on every render.

use crate::board::{MAX_SHAPES, ShapeBoard};
use crate::shapes::{Shape, ShapeKind};

/// Format a length for display: whole values print without a trailing `.0`.
pub fn format_length(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Label for one shape slot, e.g. "Rectangle 1: 100 x 50".
/// An unpopulated slot yields "Rectangle 1: N/A".
pub fn slot_label(kind: ShapeKind, index: usize, shape: Option<&Shape>) -> String {
    match shape {
        Some(shape) => format!("{} {}: {}", kind.display_name(), index + 1, shape.size_label()),
        None => format!("{} {}: N/A", kind.display_name(), index + 1),
    }
}

/// Euclidean distance between the centers of the first two shapes.
/// Exactly 0.0 (never NaN) while fewer than two shapes exist.
pub fn center_distance(shapes: &[Shape]) -> f64 {
    match (shapes.first(), shapes.get(1)) {
        (Some(a), Some(b)) => a.center().distance(b.center()),
        _ => 0.0,
    }
}

/// The measurement panel contents for one board.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    /// One label per shape slot.
    pub slots: [String; MAX_SHAPES],
    /// Distance between the two shape centers, 0.0 below two shapes.
    pub distance: f64,
}

impl Measurements {
    /// Derive the measurements for a board's current finalized shapes.
    pub fn of(board: &ShapeBoard) -> Self {
        let shapes = board.shapes();
        Self {
            slots: std::array::from_fn(|i| slot_label(board.kind(), i, shapes.get(i))),
            distance: center_distance(shapes),
        }
    }

    /// The distance formatted for display.
    pub fn distance_label(&self) -> String {
        format_length(self.distance)
    }
}
