//! Hierarchically qualified database object names.
//!
//! A [`QualifiedName`] is an ordered list of labels from the most general
//! level to the most specific one, e.g. `catalog.schema.table`. Any level may
//! be unset, which is how a reference like "table `users` in whatever schema
//! is current" is represented.
//!
//! Database tooling captures names at inconsistent precision: a changelog may
//! only name a table while introspection reports catalog, schema and table.
//! [`QualifiedName::equals`] and [`QualifiedName::matches`] compare names
//! from the most specific end so that such captures still line up, while two
//! names with *conflicting* concrete qualifiers never do.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text shown in place of an unset label. Display only.
pub const UNSET_PLACEHOLDER: &str = "#UNSET";

/// A possibly multi-level name for a database object.
///
/// Leading unset levels are dropped on construction, so the stored label list
/// always starts with a concrete label (or is empty for the unset name). Unset
/// levels between named ones are kept.
///
/// `PartialEq`, `Eq` and `Hash` compare the full label lists exactly. The
/// precision-tolerant comparisons are [`equals`](Self::equals) and
/// [`matches`](Self::matches); they are not transitive and therefore not
/// exposed through `Eq`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "NameRepr", into = "NameRepr")]
pub struct QualifiedName {
    labels: Vec<Option<String>>,
    is_virtual: bool,
}

impl QualifiedName {
    /// Returns the unset name: no leaf label and no container.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    /// Parses a dotted name such as `"public.users"`.
    ///
    /// Empty segments become unset labels, so `""` is the unset name and
    /// `"cat..users"` has an unset schema. Trailing dots are ignored:
    /// `"app.users."` is `app.users`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_labels(text.trim_end_matches('.').split('.').map(Some))
    }

    /// Builds a name from concrete labels, most general first.
    ///
    /// ```rust
    /// use oxide_changeset_core::QualifiedName;
    ///
    /// let name = QualifiedName::new(["catalog", "schema", "table"]);
    /// assert_eq!(name.leaf(), Some("table"));
    /// assert_eq!(name.to_string(), "catalog.schema.table");
    /// ```
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_labels(labels.into_iter().map(Some))
    }

    /// Builds a name from optional labels, most general first.
    ///
    /// `None` (or an empty string) marks an unset level.
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let mut labels: Vec<Option<String>> = labels
            .into_iter()
            .map(|label| label.map(Into::into).filter(|label| !label.is_empty()))
            .collect();
        let first_set = labels
            .iter()
            .position(Option::is_some)
            .unwrap_or(labels.len());
        labels.drain(..first_set);
        Self {
            labels,
            is_virtual: false,
        }
    }

    /// Returns a name one level deeper, with `self` as its container.
    #[must_use]
    pub fn child(&self, label: impl Into<String>) -> Self {
        Self::from_labels(
            self.labels
                .iter()
                .cloned()
                .chain(iter::once(Some(label.into()))),
        )
    }

    /// Marks the name as synthesized rather than captured verbatim.
    #[must_use]
    pub fn with_virtual(mut self, is_virtual: bool) -> Self {
        self.is_virtual = is_virtual;
        self
    }

    /// Returns whether the name was synthesized rather than captured.
    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    /// Returns whether no level of the name is set.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the most specific label, if set.
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.labels.last().and_then(Option::as_deref)
    }

    /// Returns the enclosing scope, if any level above the leaf is set.
    #[must_use]
    pub fn container(&self) -> Option<Self> {
        match self.labels.split_last() {
            Some((_, outer)) if !outer.is_empty() => Some(Self::from_labels(outer.iter().cloned())),
            _ => None,
        }
    }

    /// Returns the leaf label, or the unset placeholder.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.leaf().unwrap_or(UNSET_PLACEHOLDER)
    }

    /// Returns the labels from most general to most specific.
    ///
    /// Leading unset levels are never part of the list; unset levels between
    /// named ones are.
    #[must_use]
    pub fn as_list(&self) -> &[Option<String>] {
        &self.labels
    }

    /// Returns the labels aligned to exactly `len` entries.
    ///
    /// Shorter names are padded with unset entries at the front. Longer names
    /// keep their trailing `len` labels, so precision is always lost from the
    /// general end.
    #[must_use]
    pub fn as_list_padded(&self, len: usize) -> Vec<Option<&str>> {
        let labels = self.labels.iter().map(Option::as_deref);
        if len <= self.labels.len() {
            labels.skip(self.labels.len() - len).collect()
        } else {
            iter::repeat(None)
                .take(len - self.labels.len())
                .chain(labels)
                .collect()
        }
    }

    /// Returns the number of containers above the leaf.
    ///
    /// Unset outermost levels do not count; unset levels between named ones do.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }

    /// Compares two names.
    ///
    /// With `ignore_length_differences`, only the trailing labels the two
    /// names have in common are compared, position by position. An unset
    /// label equals only another unset label at the same position.
    /// Without it, the full label lists must be identical.
    #[must_use]
    pub fn equals(&self, other: &Self, ignore_length_differences: bool) -> bool {
        if !ignore_length_differences {
            return self.labels == other.labels;
        }
        let precision = self.labels.len().min(other.labels.len());
        self.as_list_padded(precision) == other.as_list_padded(precision)
    }

    /// Returns whether the names could refer to the same object.
    ///
    /// Both names are aligned from the most specific end. Wherever both have
    /// a concrete label the labels must be equal; an unset label on either
    /// side places no constraint. The unset name matches everything.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        let len = self.labels.len().max(other.labels.len());
        self.as_list_padded(len)
            .into_iter()
            .zip(other.as_list_padded(len))
            .all(|pair| match pair {
                (Some(ours), Some(theirs)) => ours == theirs,
                _ => true,
            })
    }

    /// Like [`matches`](Self::matches), where an absent name matches anything.
    #[must_use]
    pub fn matches_opt(&self, other: Option<&Self>) -> bool {
        other.is_none_or(|other| self.matches(other))
    }

    /// Keeps only the trailing `max_levels` labels, dropping outer qualifiers.
    #[must_use]
    pub fn truncate(&self, max_levels: usize) -> Self {
        let keep = max_levels.min(self.labels.len());
        Self::from_labels(self.labels[self.labels.len() - keep..].iter().cloned())
    }

    /// Orders names by leaf label only. An unset leaf sorts first.
    ///
    /// Containers are ignored: `a.t` and `b.t` are `Equal` here even though
    /// they are different objects.
    #[must_use]
    pub fn cmp_leaf(&self, other: &Self) -> Ordering {
        match (self.leaf(), other.leaf()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(ours), Some(theirs)) => ours.cmp(theirs),
        }
    }

    /// Compares leaf labels only, ignoring ASCII case.
    #[must_use]
    pub fn eq_leaf_ignore_case(&self, other: &Self) -> bool {
        match (self.leaf(), other.leaf()) {
            (Some(ours), Some(theirs)) => ours.eq_ignore_ascii_case(theirs),
            (ours, theirs) => ours.is_none() && theirs.is_none(),
        }
    }
}

impl PartialEq for QualifiedName {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl Eq for QualifiedName {}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.labels.hash(state);
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(UNSET_PLACEHOLDER);
        }
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(label.as_deref().unwrap_or(UNSET_PLACEHOLDER))?;
        }
        Ok(())
    }
}

impl FromStr for QualifiedName {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for QualifiedName {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for QualifiedName {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Wire form: a dotted string on input, a label list either way.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum NameRepr {
    Dotted(String),
    Labels(Vec<Option<String>>),
}

impl From<NameRepr> for QualifiedName {
    fn from(repr: NameRepr) -> Self {
        match repr {
            NameRepr::Dotted(text) => Self::parse(&text),
            NameRepr::Labels(labels) => Self::from_labels(labels),
        }
    }
}

impl From<QualifiedName> for NameRepr {
    fn from(name: QualifiedName) -> Self {
        Self::Labels(name.labels)
    }
}
