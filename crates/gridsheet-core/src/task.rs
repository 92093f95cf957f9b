//! Task record

/// A labelled to-do record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub done: bool,
}

impl Task {
    /// Create an open task
    pub fn new<S: Into<String>>(id: u32, description: S) -> Self {
        Self {
            id,
            description: description.into(),
            done: false,
        }
    }

    /// Return this task marked as done
    #[must_use]
    pub fn complete(self) -> Self {
        Self { done: true, ..self }
    }
}
