//! # Lesson Validation
//!
//! Single pass over a parsed [`Catalog`] that collects every authoring-rule
//! violation instead of stopping at the first one, so authors see all
//! problems in one run.
//!
//! ## Per-lesson rules
//!
//! Run for each lesson in document order, all of them, regardless of
//! earlier failures:
//!
//! 1. `objectives` is non-empty.
//! 2. `variant` is one of [`Variant::ALL`].
//! 3. `difficulty` is one of [`Difficulty::ALL`](crate::Difficulty::ALL).
//! 4. `hints` is non-empty.
//! 5. `scaffolds` is non-empty.
//! 6. `masteryRule` has `scoreThreshold` and `minimumItems` (checked separately).
//! 7. Every item has non-empty `hints` and `scaffolds` (checked separately).
//!
//! ## Coverage rule
//!
//! After all lessons, lessons are grouped by (grade, strand) and the set of
//! raw variant tags in each group must equal [`Variant::ALL`] exactly: no
//! more, no fewer. An absent tag joins the set as [`MISSING`](crate::MISSING).
//! Groups are reported in ascending key order with the required variants
//! they lack, which is an empty list when the group only has extra tags.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::model::{Catalog, Lesson, Variant};

/// Ordered list of human-readable rule violations. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    messages: Vec<String>,
}

impl Violations {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.messages
    }

    fn push(&mut self, message: String) {
        self.messages.push(message);
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{message}")?;
        }
        Ok(())
    }
}

/// Check every lesson in `catalog` against the authoring rules.
///
/// Never fails: a catalog that parsed is always validated to completion.
pub fn validate_catalog(catalog: &Catalog) -> Violations {
    let mut violations = Violations::default();
    let mut variants_by_strand: BTreeMap<(Cow<'_, str>, Cow<'_, str>), BTreeSet<Cow<'_, str>>> =
        BTreeMap::new();

    for lesson in &catalog.lessons {
        variants_by_strand
            .entry((lesson.grade_or_missing(), lesson.strand_or_missing()))
            .or_default()
            .insert(lesson.variant_or_missing());
        check_lesson(lesson, &mut violations);
    }

    for ((grade, strand), seen) in &variants_by_strand {
        if is_required_set(seen) {
            continue;
        }
        let missing: Vec<&str> = Variant::ALL
            .into_iter()
            .map(Variant::as_str)
            .filter(|tag| !seen.contains(*tag))
            .collect();
        violations.push(format!(
            "{grade}/{strand} missing lesson variants: {}",
            missing.join(", ")
        ));
    }

    tracing::debug!(
        lessons = catalog.lesson_count(),
        strands = variants_by_strand.len(),
        violations = violations.len(),
        "validated catalog"
    );
    violations
}

fn check_lesson(lesson: &Lesson, violations: &mut Violations) {
    let id = lesson.id_or_missing();

    if !lesson.has_objectives() {
        violations.push(format!("{id}: objectives must not be empty"));
    }

    if lesson.known_variant().is_none() {
        violations.push(format!(
            "{id}: variant '{}' is not one of [{}]",
            lesson.variant_or_missing(),
            allowed_variants()
        ));
    }

    if lesson.known_difficulty().is_none() {
        violations.push(format!(
            "{id}: difficulty '{}' is not recognised",
            lesson.difficulty_or_missing()
        ));
    }

    if !lesson.has_hints() {
        violations.push(format!("{id}: must provide at least one lesson hint"));
    }
    if !lesson.has_scaffolds() {
        violations.push(format!("{id}: must provide at least one lesson scaffold"));
    }

    let (has_threshold, has_minimum) = lesson
        .mastery_rule
        .as_ref()
        .map_or((false, false), |rule| {
            (rule.has_score_threshold(), rule.has_minimum_items())
        });
    if !has_threshold {
        violations.push(format!("{id}: masteryRule missing scoreThreshold"));
    }
    if !has_minimum {
        violations.push(format!("{id}: masteryRule missing minimumItems"));
    }

    for (index, item) in lesson.items().iter().enumerate() {
        let position = index + 1;
        if !item.has_hints() {
            violations.push(format!("{id} item {position}: must include at least one hint"));
        }
        if !item.has_scaffolds() {
            violations.push(format!(
                "{id} item {position}: must include at least one scaffold"
            ));
        }
    }
}

fn is_required_set(seen: &BTreeSet<Cow<'_, str>>) -> bool {
    seen.len() == Variant::ALL.len() && Variant::ALL.iter().all(|v| seen.contains(v.as_str()))
}

fn allowed_variants() -> String {
    Variant::ALL.map(Variant::as_str).join(", ")
}
