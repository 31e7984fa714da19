use std::io::Write;

use serde::Deserialize;
use serde::Serialize;

use crate::Card;
use crate::CardError;
use crate::CardResult;

/// Written in place of an empty back so the card stays importable.
pub const DEFAULT_PLACEHOLDER: &str = "FIXME";

/// Separator printed before every card in the text dump.
const TXT_RULE: &str = "------------------";

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
	/// Tab separated, fields wrapped in `[latex]...[/latex]`.
	#[default]
	Anki,
	/// Tab separated, fields wrapped in `<latex>...</latex>`.
	Mnemosyne,
	/// Human readable dump.
	Txt,
	/// Pretty printed JSON array.
	Json,
}

impl ExportFormat {
	/// The delimiters wrapped around front and back, for the tab separated
	/// formats.
	pub fn delimiters(self) -> Option<Delimiters> {
		match self {
			Self::Anki => Some(Delimiters::new("[latex]", "[/latex]")),
			Self::Mnemosyne => Some(Delimiters::new("<latex>", "</latex>")),
			Self::Txt | Self::Json => None,
		}
	}
}

/// An opening and closing marker pair, e.g. `[latex]` and `[/latex]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
	pub open: &'static str,
	pub close: &'static str,
}

impl Delimiters {
	pub const fn new(open: &'static str, close: &'static str) -> Self {
		Self { open, close }
	}

	pub fn wrap(&self, content: &str) -> String {
		format!("{}{content}{}", self.open, self.close)
	}
}

/// Options shared by every exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
	pub format: ExportFormat,
	/// Prepended to every tag as `<global_tag>::<tag>` when not empty.
	pub global_tag: String,
	/// Substituted for a back that is empty after whitespace normalization.
	pub placeholder: String,
}

impl Default for ExportOptions {
	fn default() -> Self {
		Self {
			format: ExportFormat::default(),
			global_tag: String::new(),
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
		}
	}
}

/// Write `cards` to `writer` in the configured format.
pub fn export_cards(
	writer: &mut impl Write,
	cards: &[Card],
	options: &ExportOptions,
) -> CardResult<()> {
	match options.format.delimiters() {
		Some(delimiters) => write_delimited(writer, cards, options, delimiters),
		None if options.format == ExportFormat::Txt => write_txt(writer, cards, options),
		None => write_json(writer, cards, options),
	}
}

/// Replace every newline and tab with a single space so that a card fits on
/// one line.
pub fn flatten_whitespace(content: &str) -> String {
	content.replace(['\n', '\t'], " ")
}

fn write_delimited(
	writer: &mut impl Write,
	cards: &[Card],
	options: &ExportOptions,
	delimiters: Delimiters,
) -> CardResult<()> {
	for card in cards {
		let front = flatten_whitespace(&card.front);
		let mut back = flatten_whitespace(&card.back);

		if back.trim().is_empty() {
			back = format!(" {} ", options.placeholder);
		}

		writeln!(
			writer,
			"{}\t{}\t{}",
			delimiters.wrap(&front),
			delimiters.wrap(&back),
			card.tag.with_prefix(&options.global_tag)
		)?;
	}

	Ok(())
}

fn write_txt(writer: &mut impl Write, cards: &[Card], options: &ExportOptions) -> CardResult<()> {
	for card in cards {
		writeln!(writer, "{TXT_RULE}")?;
		writeln!(writer, "{}", card.tag.with_prefix(&options.global_tag))?;
		writeln!(writer)?;
		writeln!(writer, "{}", card.front)?;
		writeln!(writer)?;
		writeln!(writer, "{}", card.back)?;
	}

	Ok(())
}

fn write_json(writer: &mut impl Write, cards: &[Card], options: &ExportOptions) -> CardResult<()> {
	let cards: Vec<Card> = cards
		.iter()
		.map(|card| {
			Card {
				tag: card.tag.with_prefix(&options.global_tag),
				..card.clone()
			}
		})
		.collect();

	serde_json::to_writer_pretty(&mut *writer, &cards)
		.map_err(|error| CardError::Json(error.to_string()))?;
	writeln!(writer)?;

	Ok(())
}
