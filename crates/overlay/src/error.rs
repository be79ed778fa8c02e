use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// The flat vector is not made of whole `(row, col, confidence)` triples.
    Malformed { len: usize },
    /// The number of points differs from the count fixed by the first result.
    LengthChanged { expected: usize, actual: usize },
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::Malformed { len } => {
                write!(f, "malformed keypoints: length {len} is not a multiple of 3")
            }
            TrackerError::LengthChanged { expected, actual } => {
                write!(f, "keypoint count changed: tracking {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for TrackerError {}
