use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use texcards_core::ExportFormat;
use texcards_core::ImportFormat;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Turn LaTeX course notes into flashcards.",
	long_about = "texcards reads a LaTeX document and turns its definitions, theorems, lemmas, \
	              proofs and exercises into flashcards.\n\nEach card is tagged with its \
	              position in the document (section::subsection::subsubsection) and written \
	              to stdout in a format that Anki or Mnemosyne can import.\n\nExamples:\n  \
	              texcards --file notes.tex > deck.txt\n  texcards --export-format mnemosyne \
	              --tag algebra\n  texcards --import-format delim --file cards.tex \
	              --export-format txt"
)]
pub struct TexcardsCli {
	/// The document to read, relative to `--path`.
	#[arg(long, short, default_value = "main.tex")]
	pub file: PathBuf,

	/// Input format. Falls back to `texcards.toml`, then `tex`.
	#[arg(long, value_enum)]
	pub import_format: Option<ImportFormatArg>,

	/// Output format. Falls back to `texcards.toml`, then `anki`.
	#[arg(long, value_enum)]
	pub export_format: Option<ExportFormatArg>,

	/// Global tag prepended to every card tag, e.g. `algebra` gives
	/// `algebra::1::2::1`.
	#[arg(long, short)]
	pub tag: Option<String>,

	/// Path to the project root directory, where `texcards.toml` is looked up.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImportFormatArg {
	/// A LaTeX document with `\section` commands and theorem-like
	/// environments.
	Tex,
	/// Card records separated by `% --- CARD ---`, with tag, front and back
	/// separated by `% ------------`.
	Delim,
}

impl From<ImportFormatArg> for ImportFormat {
	fn from(value: ImportFormatArg) -> Self {
		match value {
			ImportFormatArg::Tex => Self::Tex,
			ImportFormatArg::Delim => Self::Delim,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
	/// Tab separated lines with fields wrapped in `[latex]...[/latex]`.
	Anki,
	/// Tab separated lines with fields wrapped in `<latex>...</latex>`.
	Mnemosyne,
	/// Human-readable dump, one block per card.
	Txt,
	/// JSON array of `{ tag, front, back }` objects.
	Json,
}

impl From<ExportFormatArg> for ExportFormat {
	fn from(value: ExportFormatArg) -> Self {
		match value {
			ExportFormatArg::Anki => Self::Anki,
			ExportFormatArg::Mnemosyne => Self::Mnemosyne,
			ExportFormatArg::Txt => Self::Txt,
			ExportFormatArg::Json => Self::Json,
		}
	}
}
