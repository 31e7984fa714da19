use std::ops::Range;

use logos::Logos;
use logos::SpannedIter;

use crate::CardError;
use crate::CardResult;
use crate::tokens::Command;
use crate::tokens::format_command;

/// Raw tokens produced by logos. Everything that is not a delimiter the
/// scanner cares about is folded into `Text`, so the token spans always tile
/// the input.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
	#[token("\\\\")]
	EscapedBackslash,
	#[token("\\")]
	Backslash,
	#[token("$")]
	Dollar,
	#[token("{")]
	BraceOpen,
	#[token("}")]
	BraceClose,
	#[token("[")]
	BracketOpen,
	#[token("]")]
	BracketClose,
	#[token("\n")]
	Newline,
	#[regex(r"[^\\$\{\}\[\]\n]+")]
	Text,
}

/// Walks the logos token stream lazily from a starting offset until it has
/// read one complete command.
struct CommandWalker<'a> {
	/// The whole document. Spans handed out are absolute offsets into it.
	source: &'a str,
	/// Offset of the first byte handed to the lexer.
	base: usize,
	/// The raw tokens, lexed on demand.
	tokens: SpannedIter<'a, RawToken>,
}

impl<'a> CommandWalker<'a> {
	fn new(source: &'a str, base: usize, rest: &'a str) -> Self {
		Self {
			source,
			base,
			tokens: RawToken::lexer(rest).spanned(),
		}
	}

	/// The next raw token with its span translated to document offsets.
	fn next_raw(&mut self) -> Option<(RawToken, Range<usize>)> {
		let (result, span) = self.tokens.next()?;
		let token = result.unwrap_or(RawToken::Text);

		Some((token, self.base + span.start..self.base + span.end))
	}

	/// Skip everything up to and including the `$` that closes an inline
	/// math span. Returns `false` if the input ends first.
	fn skip_math(&mut self) -> bool {
		while let Some((token, _)) = self.next_raw() {
			if token == RawToken::Dollar {
				return true;
			}
		}

		false
	}

	/// Main loop: find the next backslash outside of math that is not part of
	/// an escaped `\\` pair and read the command it starts.
	fn find_command(&mut self) -> Option<Command<'a>> {
		while let Some((token, span)) = self.next_raw() {
			match token {
				RawToken::Dollar => {
					if !self.skip_math() {
						return None;
					}
				}
				RawToken::Backslash => return self.read_command(span.start),
				_ => {}
			}
		}

		None
	}

	/// Read a command whose backslash sits at `start`. The name runs up to
	/// the first newline (bare command) or `{` (qualified command).
	fn read_command(&mut self, start: usize) -> Option<Command<'a>> {
		let brace = loop {
			let (token, span) = self.next_raw()?;

			match token {
				RawToken::Newline => {
					return Some(Command {
						name: &self.source[start + 1..span.start],
						qualifier: "",
						argument: "",
						span: start..span.end,
					});
				}
				RawToken::BraceOpen => break span,
				_ => {}
			}
		};

		let name = &self.source[start + 1..brace.start];

		let close = loop {
			let (token, span) = self.next_raw()?;

			if token == RawToken::BraceClose {
				break span;
			}
		};

		let qualifier = &self.source[brace.end..close.start];

		let (argument, end) = match self.read_argument() {
			Some((argument, end)) => (argument, end),
			None => ("", close.end),
		};

		Some(Command {
			name,
			qualifier,
			argument,
			span: start..end,
		})
	}

	/// Read a `[...]` argument that starts immediately after the qualifier.
	/// Returns the argument text and the offset just past `]`.
	fn read_argument(&mut self) -> Option<(&'a str, usize)> {
		let (token, open) = self.next_raw()?;

		if token != RawToken::BracketOpen {
			return None;
		}

		loop {
			let (token, span) = self.next_raw()?;

			if token == RawToken::BracketClose {
				return Some((&self.source[open.end..span.start], span.end));
			}
		}
	}
}

/// Scan `source` from `offset` for the next command.
///
/// Returns `Ok(None)` at the end of input. Inline math spans (`$...$`) and
/// escaped backslashes are skipped. Malformed trailing input, such as a
/// qualifier that is never closed, a command with neither newline nor `{`
/// after it, or a math span that never closes, also reads as the end of
/// input.
///
/// The only error is an `offset` that lies past the end of `source` or
/// inside a multi-byte character.
pub fn next_command(source: &str, offset: usize) -> CardResult<Option<Command<'_>>> {
	let Some(rest) = source.get(offset..) else {
		return Err(CardError::InvalidOffset {
			offset,
			len: source.len(),
		});
	};

	let mut walker = CommandWalker::new(source, offset, rest);
	Ok(walker.find_command())
}

/// Scan forward from `offset` until a command named `name` with the
/// qualifier `qualifier` is found, and return its span.
///
/// Nesting is not tracked: the first match wins, even if it closes an inner
/// block of the same kind. Reaching the end of input is an error.
pub fn find_command(
	source: &str,
	offset: usize,
	name: &str,
	qualifier: &str,
) -> CardResult<Range<usize>> {
	let mut cursor = offset;

	loop {
		let Some(command) = next_command(source, cursor)? else {
			return Err(CardError::MissingCommand {
				command: format_command(name, qualifier),
				span: (offset, 0).into(),
			});
		};

		if command.is(name, qualifier) {
			return Ok(command.span);
		}

		cursor = command.end();
	}
}
