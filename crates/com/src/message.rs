use {
    crate::Batch,
    serde::{Deserialize, Deserializer, Serialize, de::Error as _},
    serde_json::Value,
};

/// Request body of `/process_frame`.
#[derive(Debug, Serialize)]
pub struct ProcessFrameRequest<'a> {
    pub images: Vec<&'a str>,
}

impl<'a> From<&'a Batch> for ProcessFrameRequest<'a> {
    fn from(batch: &'a Batch) -> Self {
        Self {
            images: batch.frames().iter().map(|frame| frame.as_str()).collect(),
        }
    }
}

/// Body of an error response, e.g. `{ "error": "..." }` with status 500.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Decoded answer for one batch. Every field is optional; an answer with
/// none of them is valid and simply means there is nothing to apply.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InferenceResponse {
    #[serde(default, deserialize_with = "flat_keypoints")]
    keypoints: Option<Vec<f32>>,
    #[serde(default)]
    predictions: Option<Vec<Vec<f32>>>,
    #[serde(default)]
    message: Option<String>,
}

impl InferenceResponse {
    pub fn new(
        keypoints: Option<Vec<f32>>,
        predictions: Option<Vec<Vec<f32>>>,
        message: Option<String>,
    ) -> Self {
        Self {
            keypoints,
            predictions,
            message,
        }
    }

    /// Flat `(row, col, confidence)` triples, if the response carried any.
    pub fn keypoints(&self) -> Option<&[f32]> {
        self.keypoints.as_deref()
    }

    /// The first score vector, when present and non-empty.
    pub fn classification(&self) -> Option<ClassificationVector> {
        self.predictions
            .as_ref()
            .and_then(|predictions| predictions.first())
            .filter(|scores| !scores.is_empty())
            .map(|scores| ClassificationVector::new(scores.clone()))
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True when there is neither keypoints nor a classification to apply.
    pub fn is_empty(&self) -> bool {
        self.keypoints.is_none() && self.classification().is_none()
    }
}

// The service emits per-frame keypoint arrays that may be nested to any
// depth; flatten them row-major into one sequence.
fn flat_keypoints<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<f32>>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Array(_)) => {
            let mut flat = Vec::new();
            flatten_into(&value, &mut flat).map_err(D::Error::custom)?;
            Ok(Some(flat))
        }
        Some(other) => Err(D::Error::custom(format!(
            "keypoints must be an array, got {other}"
        ))),
    }
}

fn flatten_into(value: &Value, out: &mut Vec<f32>) -> Result<(), String> {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_into(item, out)?;
            }
            Ok(())
        }
        Value::Number(number) => {
            let v = number
                .as_f64()
                .ok_or_else(|| format!("keypoint value out of range: {number}"))?;
            out.push(v as f32);
            Ok(())
        }
        other => Err(format!("keypoint values must be numbers, got {other}")),
    }
}

/// Ordered class scores for one batch, labelled `Class 1`, `Class 2`, ...
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationVector {
    scores: Vec<f32>,
}

impl ClassificationVector {
    pub const DISPLAYED_CLASSES: usize = 6;

    pub fn new(scores: Vec<f32>) -> Self {
        Self { scores }
    }

    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn label(index: usize) -> String {
        format!("Class {}", index + 1)
    }

    /// `(label, score)` pairs for the displayed classes.
    pub fn labelled(&self) -> impl Iterator<Item = (String, f32)> + '_ {
        self.scores
            .iter()
            .take(Self::DISPLAYED_CLASSES)
            .enumerate()
            .map(|(index, &score)| (Self::label(index), score))
    }
}
