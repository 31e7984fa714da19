use miette::Diagnostic;
use miette::SourceSpan;
use thiserror::Error;

use crate::BlockKind;

/// Which half of an exercise was found with its boundaries inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ExercisePart {
	#[display("question")]
	Question,
	#[display("solution")]
	Solution,
}

impl ExercisePart {
	/// The environment name used for this part, e.g. `question`.
	pub fn environment(self) -> &'static str {
		match self {
			Self::Question => "question",
			Self::Solution => "solution",
		}
	}
}

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum CardError {
	#[error(transparent)]
	#[diagnostic(code(texcards::io_error))]
	Io(#[from] std::io::Error),

	#[error("cannot scan from offset {offset}: source is {len} bytes long")]
	#[diagnostic(code(texcards::invalid_offset))]
	InvalidOffset { offset: usize, len: usize },

	#[error("missing `{command}` before the end of the document")]
	#[diagnostic(
		code(texcards::missing_command),
		help("add `{command}` to close this block")
	)]
	MissingCommand {
		command: String,
		#[label("searching from here")]
		span: SourceSpan,
	},

	#[error("malformed exercise {tag}: `\\begin{{{part}}}` does not precede `\\end{{{part}}}`")]
	#[diagnostic(
		code(texcards::malformed_exercise),
		help("each exercise needs a question block followed by a solution block")
	)]
	MalformedExercise {
		tag: String,
		part: ExercisePart,
		#[label("this {part} is inverted")]
		span: SourceSpan,
	},

	#[error("block #{index}: cannot get {kind}")]
	#[diagnostic(code(texcards::block))]
	Block {
		kind: BlockKind,
		index: usize,
		#[label("{kind} opened here")]
		span: SourceSpan,
		#[source]
		source: Box<CardError>,
	},

	#[error("card record #{index} has {found} field(s), expected 3 (tag, front, back)")]
	#[diagnostic(
		code(texcards::malformed_record),
		help("separate the fields of each card with a `% ------------` line")
	)]
	MalformedRecord { index: usize, found: usize },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(texcards::config_parse),
		help("check that texcards.toml is valid TOML with [import], [export] and/or [labels] sections")
	)]
	ConfigParse(String),

	#[error("failed to serialize cards as json: {0}")]
	#[diagnostic(code(texcards::json))]
	Json(String),
}

impl CardError {
	/// The innermost error, unwrapping any [`CardError::Block`] layers.
	pub fn root_cause(&self) -> &CardError {
		match self {
			Self::Block { source, .. } => source.root_cause(),
			other => other,
		}
	}
}

pub type CardResult<T> = Result<T, CardError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
