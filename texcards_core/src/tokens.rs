use std::fmt::Display;
use std::ops::Range;

/// A single command found by the scanner, borrowed from the source text.
///
/// Two shapes are produced:
///
/// - a bare command, `\maketitle` followed by a newline, with an empty
///   qualifier and argument;
/// - a qualified command, `\begin{theorem}[Pythagore]`, where `theorem` is
///   the qualifier and `Pythagore` the optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
	/// Text between the backslash and the first newline or `{`.
	pub name: &'a str,
	/// Text between `{` and the next `}`. Empty for bare commands.
	pub qualifier: &'a str,
	/// Text between `[` and `]` directly after the qualifier. Empty when
	/// absent.
	pub argument: &'a str,
	/// Byte span of the whole token: from the backslash to just past the
	/// newline, `}` or `]` that ended it.
	pub span: Range<usize>,
}

impl Command<'_> {
	/// Whether this command has the given name and qualifier, e.g.
	/// `command.is("end", "theorem")` for `\end{theorem}`.
	pub fn is(&self, name: &str, qualifier: &str) -> bool {
		self.name == name && self.qualifier == qualifier
	}

	/// Byte offset of the backslash that opened this command.
	pub fn start(&self) -> usize {
		self.span.start
	}

	/// Byte offset just past the end of this command.
	pub fn end(&self) -> usize {
		self.span.end
	}

	/// Whether the command was terminated by a newline rather than a brace.
	pub fn is_bare(&self) -> bool {
		// `\` + name + `\n`. A braced token is always at least one byte longer.
		self.span.len() == self.name.len() + 2
	}
}

impl Display for Command<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "\\{}", self.name)?;

		if self.is_bare() {
			return Ok(());
		}

		write!(f, "{{{}}}", self.qualifier)?;

		if !self.argument.is_empty() {
			write!(f, "[{}]", self.argument)?;
		}

		Ok(())
	}
}

/// Render the command that closes or opens an environment, e.g.
/// `\end{theorem}`. Used in diagnostics.
pub fn format_command(name: &str, qualifier: &str) -> String {
	format!("\\{name}{{{qualifier}}}")
}
