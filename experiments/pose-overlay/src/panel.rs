use com::ClassificationVector;

pub const WAITING: &str = "Waiting for predictions...";

/// Text rendering of the latest classification.
#[derive(Debug, Default)]
pub struct Panel {
    latest: Option<ClassificationVector>,
}

impl Panel {
    pub fn update(&mut self, classification: ClassificationVector) {
        self.latest = Some(classification);
    }

    pub fn lines(&self) -> Vec<String> {
        match &self.latest {
            Some(classification) => classification
                .labelled()
                .map(|(label, score)| format!("{}: {}", label, score))
                .collect(),
            None => vec![WAITING.to_string()],
        }
    }
}
