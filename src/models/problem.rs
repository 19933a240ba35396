use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three text fields compared between a problem and its fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparableField {
    Title,
    Pitch,
    Description,
}

impl ComparableField {
    /// Evaluation order. Error messages follow it.
    pub const ALL: [ComparableField; 3] = [Self::Title, Self::Pitch, Self::Description];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Pitch => "Pitch",
            Self::Description => "Description",
        }
    }
}

impl fmt::Display for ComparableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value per comparable field: weights, thresholds, or computed differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerField<T> {
    pub title: T,
    pub pitch: T,
    pub description: T,
}

impl<T: Copy> PerField<T> {
    pub fn new(title: T, pitch: T, description: T) -> Self {
        Self { title, pitch, description }
    }

    pub fn from_fn(mut f: impl FnMut(ComparableField) -> T) -> Self {
        Self::new(
            f(ComparableField::Title),
            f(ComparableField::Pitch),
            f(ComparableField::Description),
        )
    }

    pub fn get(&self, field: ComparableField) -> T {
        match field {
            ComparableField::Title => self.title,
            ComparableField::Pitch => self.pitch,
            ComparableField::Description => self.description,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(ComparableField, T) -> U) -> PerField<U> {
        PerField {
            title: f(ComparableField::Title, self.title),
            pitch: f(ComparableField::Pitch, self.pitch),
            description: f(ComparableField::Description, self.description),
        }
    }
}

/// The comparable text of a problem submission.
///
/// Missing fields deserialize as empty strings so a partially filled form
/// still produces a score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemText {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "elevatorPitch", alias = "elevator_pitch")]
    pub pitch: String,
    #[serde(default)]
    pub description: String,
}

impl ProblemText {
    pub fn new(
        title: impl Into<String>,
        pitch: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            pitch: pitch.into(),
            description: description.into(),
        }
    }

    pub fn field(&self, field: ComparableField) -> &str {
        match field {
            ComparableField::Title => &self.title,
            ComparableField::Pitch => &self.pitch,
            ComparableField::Description => &self.description,
        }
    }

    /// True when every field is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        ComparableField::ALL.iter().all(|&f| self.field(f).trim().is_empty())
    }
}

/// A fork in progress: the problem it forked from plus the candidate text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkPayload {
    /// Identifier of the parent problem, when known.
    #[serde(default)]
    pub parent_id: Option<String>,
    pub original: ProblemText,
    #[serde(default)]
    pub candidate: ProblemText,
}
