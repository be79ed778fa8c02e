use {crate::*, base::Vec2};

/// A point is shown only when its confidence is strictly above this.
pub const CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Last rendered state of one keypoint, in normalized coordinates.
///
/// A confidence of 0 means the point is not on the overlay; the position is
/// then meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackedPoint {
    pub position: Vec2<f32>,
    pub confidence: f32,
}

impl TrackedPoint {
    pub fn is_visible(&self) -> bool {
        self.confidence > 0.0
    }
}

/// One overlay update. Positions are normalized `[0, 1]`; the renderer maps
/// them to pixels when it executes the op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// The point just appeared.
    Draw { index: usize, at: Vec2<f32> },
    /// The point stays visible: erase the old spot, then draw the new one.
    Move {
        index: usize,
        from: Vec2<f32>,
        to: Vec2<f32>,
    },
    /// The point dropped below threshold.
    Erase { index: usize, at: Vec2<f32> },
}

impl DrawOp {
    pub fn index(&self) -> usize {
        match *self {
            DrawOp::Draw { index, .. } | DrawOp::Move { index, .. } | DrawOp::Erase { index, .. } => {
                index
            }
        }
    }
}

/// Owns the per-point state behind the overlay.
///
/// The point count is fixed by the first non-empty result. Calls must be
/// serialized: two overlapping reconciles would diff against the same old
/// state and corrupt the overlay.
#[derive(Debug, Default)]
pub struct KeypointTracker {
    points: Vec<TrackedPoint>,
}

impl KeypointTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[TrackedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Diff a flat `(row, col, confidence)` vector against the stored state.
    ///
    /// On error nothing is changed. On success the whole new state replaces
    /// the old one at once.
    pub fn reconcile(&mut self, flat: &[f32]) -> Result<Vec<DrawOp>, TrackerError> {
        if flat.len() % 3 != 0 {
            return Err(TrackerError::Malformed { len: flat.len() });
        }
        let count = flat.len() / 3;

        // first result: every point starts out hidden
        let initial;
        let previous: &[TrackedPoint] = if self.points.is_empty() {
            if count == 0 {
                return Ok(Vec::new());
            }
            log::debug!("tracking {} keypoints", count);
            initial = vec![TrackedPoint::default(); count];
            &initial
        } else if count != self.points.len() {
            return Err(TrackerError::LengthChanged {
                expected: self.points.len(),
                actual: count,
            });
        } else {
            &self.points
        };

        let mut next = previous.to_vec();
        let mut ops = Vec::new();
        for (index, triple) in flat.chunks_exact(3).enumerate() {
            let (row, col, confidence) = (triple[0], triple[1], triple[2]);
            let old = previous[index];

            if confidence > CONFIDENCE_THRESHOLD {
                let at = Vec2::new(col, row);
                ops.push(if old.is_visible() {
                    DrawOp::Move {
                        index,
                        from: old.position,
                        to: at,
                    }
                } else {
                    DrawOp::Draw { index, at }
                });
                next[index] = TrackedPoint {
                    position: at,
                    confidence,
                };
            } else if old.is_visible() {
                ops.push(DrawOp::Erase {
                    index,
                    at: old.position,
                });
                next[index].confidence = 0.0;
            }
        }

        self.points = next;
        Ok(ops)
    }
}
