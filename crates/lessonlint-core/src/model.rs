//! # Catalog Data Model
//!
//! Typed records for the curriculum catalog document. Every lesson field is
//! optional so that an incomplete lesson still parses and its gaps surface as
//! rule violations rather than load failures. Only documents whose *shape*
//! is wrong (a string where a list belongs, a non-object root) are rejected
//! by the loader.
//!
//! The document uses camelCase keys (`strandID`, `masteryRule`,
//! `scoreThreshold`, `minimumItems`); unknown keys are ignored.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder rendered in messages for an absent identifying field.
pub const MISSING: &str = "<missing>";

/// Root catalog document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    /// Lessons in document order. Absent `lessons` means an empty catalog.
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Catalog {
    /// Number of lessons in the catalog.
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Distinct rendered grades across all lessons, sorted. Lessons without
    /// a grade contribute [`MISSING`].
    pub fn grades(&self) -> BTreeSet<Cow<'_, str>> {
        self.lessons.iter().map(Lesson::grade_or_missing).collect()
    }
}

/// One teachable unit.
///
/// Identifying and tag fields keep the raw JSON value so that a number or
/// other non-string value still loads. Such values render through their JSON
/// text and never match a known [`Variant`] or [`Difficulty`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Lesson identifier used to label every message for this lesson.
    pub id: Option<Value>,
    /// Grade the lesson belongs to; half of the coverage grouping key.
    pub grade: Option<Value>,
    /// Strand within the grade; the other half of the coverage grouping key.
    #[serde(rename = "strandID")]
    pub strand_id: Option<Value>,
    /// Raw variant tag; checked against [`Variant`] during validation.
    pub variant: Option<Value>,
    /// Raw difficulty tag; checked against [`Difficulty`] during validation.
    pub difficulty: Option<Value>,
    /// Learning objectives. Must be non-empty.
    pub objectives: Option<Vec<Value>>,
    /// Lesson-level hints. Must be non-empty.
    pub hints: Option<Vec<Value>>,
    /// Lesson-level scaffolds. Must be non-empty.
    pub scaffolds: Option<Vec<Value>>,
    /// Pass/fail criteria; `null` is treated as absent.
    pub mastery_rule: Option<MasteryRule>,
    /// Exercises in document order.
    pub items: Option<Vec<Item>>,
}

impl Lesson {
    pub fn id_or_missing(&self) -> Cow<'_, str> {
        render(&self.id)
    }

    pub fn grade_or_missing(&self) -> Cow<'_, str> {
        render(&self.grade)
    }

    pub fn strand_or_missing(&self) -> Cow<'_, str> {
        render(&self.strand_id)
    }

    pub fn variant_or_missing(&self) -> Cow<'_, str> {
        render(&self.variant)
    }

    pub fn difficulty_or_missing(&self) -> Cow<'_, str> {
        render(&self.difficulty)
    }

    /// The variant, if the tag is a string naming a known one.
    pub fn known_variant(&self) -> Option<Variant> {
        self.variant
            .as_ref()
            .and_then(Value::as_str)
            .and_then(Variant::from_tag)
    }

    /// The difficulty, if the tag is a string naming a known one.
    pub fn known_difficulty(&self) -> Option<Difficulty> {
        self.difficulty
            .as_ref()
            .and_then(Value::as_str)
            .and_then(Difficulty::from_tag)
    }

    pub fn has_objectives(&self) -> bool {
        non_empty(&self.objectives)
    }

    pub fn has_hints(&self) -> bool {
        non_empty(&self.hints)
    }

    pub fn has_scaffolds(&self) -> bool {
        non_empty(&self.scaffolds)
    }

    /// Items in document order; an absent `items` list yields nothing.
    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or_default()
    }
}

/// Pass/fail criteria for a lesson.
///
/// Only key presence is tracked: a key written as `null` still counts as
/// present, matching how authors mark a threshold as "to be decided".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryRule {
    #[serde(default, deserialize_with = "present")]
    pub score_threshold: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub minimum_items: Option<Value>,
}

impl MasteryRule {
    pub fn has_score_threshold(&self) -> bool {
        self.score_threshold.is_some()
    }

    pub fn has_minimum_items(&self) -> bool {
        self.minimum_items.is_some()
    }
}

/// An individual exercise within a lesson.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    /// Item-level hints. Must be non-empty.
    pub hints: Option<Vec<Value>>,
    /// Item-level scaffolds. Must be non-empty.
    pub scaffolds: Option<Vec<Value>>,
}

impl Item {
    pub fn has_hints(&self) -> bool {
        non_empty(&self.hints)
    }

    pub fn has_scaffolds(&self) -> bool {
        non_empty(&self.scaffolds)
    }
}

/// Pedagogical mode of a lesson. Every (grade, strand) needs all three.
///
/// Variants are declared in name order so `Ord` sorts them alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    Challenge,
    Practice,
    Remediation,
}

impl Variant {
    /// All variants, alphabetically.
    pub const ALL: [Variant; 3] = [Self::Challenge, Self::Practice, Self::Remediation];

    /// The tag used in catalog documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Challenge => "challenge",
            Self::Practice => "practice",
            Self::Remediation => "remediation",
        }
    }

    /// Parse a catalog tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == tag)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tag of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Emerging,
    Developing,
    Secure,
    Extending,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Self::Emerging,
        Self::Developing,
        Self::Secure,
        Self::Extending,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Emerging => "emerging",
            Self::Developing => "developing",
            Self::Secure => "secure",
            Self::Extending => "extending",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == tag)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strings render unquoted, other values as JSON text, absent as [`MISSING`].
fn render(field: &Option<Value>) -> Cow<'_, str> {
    match field {
        None => Cow::Borrowed(MISSING),
        Some(Value::String(s)) => Cow::Borrowed(s),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

fn non_empty(values: &Option<Vec<Value>>) -> bool {
    values.as_ref().is_some_and(|v| !v.is_empty())
}

/// Deserialize any value, `null` included, as `Some`. Paired with
/// `#[serde(default)]` this distinguishes an absent key from a null one.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
