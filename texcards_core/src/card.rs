use std::fmt::Display;

use derive_more::Deref;
use serde::Deserialize;
use serde::Serialize;

/// One extracted flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
	/// Position in the sectioning hierarchy, e.g. `1::2::1`.
	pub tag: Tag,
	/// Label and title, e.g. `Théorème: Pythagore`.
	pub front: String,
	/// Interior text of the block.
	pub back: String,
}

impl Card {
	pub fn new(tag: impl Into<Tag>, front: impl Into<String>, back: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			front: front.into(),
			back: back.into(),
		}
	}
}

/// A hierarchical card tag. Components are joined with `::`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
	/// Prefix the tag with a global segment: `algebra` + `1::2::1` gives
	/// `algebra::1::2::1`. An empty prefix leaves the tag unchanged.
	#[must_use]
	pub fn with_prefix(&self, prefix: &str) -> Tag {
		if prefix.is_empty() {
			self.clone()
		} else {
			Tag(format!("{prefix}::{}", self.0))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for Tag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<String> for Tag {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for Tag {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

/// The three sectioning levels that feed a card's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLevel {
	Section,
	Subsection,
	Subsubsection,
}

impl SectionLevel {
	/// Map a command name such as `subsection` to its level.
	pub fn from_command(name: &str) -> Option<Self> {
		match name {
			"section" => Some(Self::Section),
			"subsection" => Some(Self::Subsection),
			"subsubsection" => Some(Self::Subsubsection),
			_ => None,
		}
	}
}

/// Running sectioning counters for one extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounters {
	pub section: usize,
	pub subsection: usize,
	pub subsubsection: usize,
}

impl SectionCounters {
	/// Enter a new sectioning level. Lower levels restart at zero.
	pub fn enter(&mut self, level: SectionLevel) {
		match level {
			SectionLevel::Section => {
				self.section += 1;
				self.subsection = 0;
				self.subsubsection = 0;
			}
			SectionLevel::Subsection => {
				self.subsection += 1;
				self.subsubsection = 0;
			}
			SectionLevel::Subsubsection => {
				self.subsubsection += 1;
			}
		}
	}

	/// Render the counters as a tag. A level that has not been entered yet
	/// renders as `1`.
	pub fn tag(&self) -> Tag {
		Tag(format!(
			"{}::{}::{}",
			self.section.max(1),
			self.subsection.max(1),
			self.subsubsection.max(1)
		))
	}
}

/// The environments that produce cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
	Definition,
	Theorem,
	Lemma,
	Proof,
	Exercise,
}

impl BlockKind {
	/// Recognize a `\begin` qualifier. Theorems and lemmas accept their short
	/// forms `theo` and `lem`.
	pub fn from_qualifier(qualifier: &str) -> Option<Self> {
		match qualifier {
			"definition" => Some(Self::Definition),
			"theorem" | "theo" => Some(Self::Theorem),
			"lemma" | "lem" => Some(Self::Lemma),
			"proof" => Some(Self::Proof),
			"exercise" => Some(Self::Exercise),
			_ => None,
		}
	}

	/// The default label written before the card's title.
	pub fn default_label(self) -> &'static str {
		match self {
			Self::Definition => "Définition",
			Self::Theorem => "Théorème",
			Self::Lemma => "Lemme",
			Self::Proof => "Preuve",
			Self::Exercise => "Exercice",
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Definition => "definition",
			Self::Theorem => "theorem",
			Self::Lemma => "lemma",
			Self::Proof => "proof",
			Self::Exercise => "exercise",
		}
	}
}

impl Display for BlockKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Labels written at the start of each card's front, one per block kind.
///
/// ```toml
/// [labels]
/// theorem = "Theorem"
/// lemma = "Lemma"
/// ```
///
/// Kinds that are not configured keep their default label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Labels {
	#[serde(default)]
	pub definition: Option<String>,
	#[serde(default)]
	pub theorem: Option<String>,
	#[serde(default)]
	pub lemma: Option<String>,
	#[serde(default)]
	pub proof: Option<String>,
	#[serde(default)]
	pub exercise: Option<String>,
}

impl Labels {
	/// The label for `kind`, falling back to [`BlockKind::default_label`].
	pub fn get(&self, kind: BlockKind) -> &str {
		let configured = match kind {
			BlockKind::Definition => &self.definition,
			BlockKind::Theorem => &self.theorem,
			BlockKind::Lemma => &self.lemma,
			BlockKind::Proof => &self.proof,
			BlockKind::Exercise => &self.exercise,
		};

		configured.as_deref().unwrap_or(kind.default_label())
	}

	/// Build a card front such as `Théorème: Pythagore`.
	pub fn front(&self, kind: BlockKind, title: &str) -> String {
		format!("{}: {title}", self.get(kind))
	}
}
