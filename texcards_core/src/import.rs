use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::Card;
use crate::CardError;
use crate::CardResult;
use crate::Labels;
use crate::extract_with_labels;

/// Separates card records in the delimited format.
pub const CARD_SEPARATOR: &str = "% --- CARD ---";

/// Separates the tag, front and back of one delimited record.
pub const FIELD_SEPARATOR: &str = "% ------------";

/// Supported input formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
	/// A LaTeX document with sectioning commands and block environments.
	#[default]
	Tex,
	/// Pre-split card records, see [`from_delimited`].
	Delim,
}

/// Read cards from `source` in the given format.
pub fn import_cards(format: ImportFormat, source: &str, labels: &Labels) -> CardResult<Vec<Card>> {
	match format {
		ImportFormat::Tex => extract_with_labels(source, labels),
		ImportFormat::Delim => from_delimited(source),
	}
}

/// Parse delimited card records.
///
/// ```text
/// % --- CARD ---
/// algebra::groups
/// % ------------
/// What is a group?
/// % ------------
/// A set with an associative operation, an identity and inverses.
/// ```
///
/// Blank records are ignored. Every other record must have exactly three
/// fields, which are trimmed.
pub fn from_delimited(source: &str) -> CardResult<Vec<Card>> {
	let mut cards = vec![];

	for (index, record) in source
		.split(CARD_SEPARATOR)
		.filter(|record| !record.trim().is_empty())
		.enumerate()
	{
		let fields: Vec<&str> = record.split(FIELD_SEPARATOR).map(str::trim).collect();

		let [tag, front, back] = fields.as_slice() else {
			return Err(CardError::MalformedRecord {
				index,
				found: fields.len(),
			});
		};

		cards.push(Card::new(*tag, *front, *back));
	}

	debug!(cards = cards.len(), "read delimited records");

	Ok(cards)
}
