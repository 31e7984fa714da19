use std::ops::Range;

use tracing::debug;
use tracing::instrument;
use tracing::trace;

use crate::BlockKind;
use crate::Card;
use crate::CardError;
use crate::CardResult;
use crate::ExercisePart;
use crate::Labels;
use crate::SectionCounters;
use crate::SectionLevel;
use crate::scanner::find_command;
use crate::scanner::next_command;
use crate::tokens::Command;

/// Extract every card from a LaTeX document using the default labels.
pub fn extract(source: impl AsRef<str>) -> CardResult<Vec<Card>> {
	extract_with_labels(source, &Labels::default())
}

/// Extract every card from a LaTeX document.
///
/// Sectioning commands update the running tag; `\begin{...}` commands for a
/// known [`BlockKind`] produce one card each. Everything else is skipped,
/// including the bodies of unknown environments, which are scanned as plain
/// content. The first error aborts the whole extraction.
#[instrument(level = "debug", skip_all, fields(len = source.as_ref().len()))]
pub fn extract_with_labels(source: impl AsRef<str>, labels: &Labels) -> CardResult<Vec<Card>> {
	let source = source.as_ref();
	let mut extractor = Extractor {
		source,
		labels,
		counters: SectionCounters::default(),
		cursor: 0,
		cards: vec![],
	};

	extractor.run()?;
	debug!(cards = extractor.cards.len(), "extraction finished");

	Ok(extractor.cards)
}

/// State of one extraction run. The extractor owns the only cursor; block
/// handlers receive it by value and hand back the offset to resume from.
struct Extractor<'a> {
	source: &'a str,
	labels: &'a Labels,
	counters: SectionCounters,
	cursor: usize,
	cards: Vec<Card>,
}

impl<'a> Extractor<'a> {
	fn run(&mut self) -> CardResult<()> {
		while let Some(command) = next_command(self.source, self.cursor)? {
			self.cursor = command.end();

			if let Some(level) = SectionLevel::from_command(command.name) {
				self.counters.enter(level);
				debug!(tag = %self.counters.tag(), "entered {}", command.name);
				continue;
			}

			let kind = match command.name {
				"begin" => BlockKind::from_qualifier(command.qualifier),
				_ => None,
			};

			let Some(kind) = kind else {
				trace!(%command, "skipping command");
				continue;
			};

			let (card, end) = self.block(kind, &command).map_err(|error| {
				CardError::Block {
					kind,
					index: self.cards.len(),
					span: command.span.clone().into(),
					source: Box::new(error),
				}
			})?;

			debug!(%kind, tag = %card.tag, "extracted card");
			self.cards.push(card);
			self.cursor = end;
		}

		Ok(())
	}

	/// Run the handler for `kind`. The opening command has already been
	/// consumed, so `self.cursor` sits just past it.
	fn block(&self, kind: BlockKind, opening: &Command<'a>) -> CardResult<(Card, usize)> {
		match kind {
			BlockKind::Exercise => self.exercise(),
			_ => self.simple_block(kind, opening),
		}
	}

	/// Definitions, theorems, lemmas and proofs: the back is everything up to
	/// the matching `\end`, the front is the label plus the `[...]` argument.
	fn simple_block(&self, kind: BlockKind, opening: &Command<'a>) -> CardResult<(Card, usize)> {
		let end = find_command(self.source, self.cursor, "end", opening.qualifier)?;

		let card = Card::new(
			self.counters.tag(),
			self.labels.front(kind, opening.argument),
			&self.source[self.cursor..end.start],
		);

		Ok((card, end.end))
	}

	/// Exercises hold a `question` block (the front) and a `solution` block
	/// (the back). Both are searched for inside the exercise body only.
	fn exercise(&self) -> CardResult<(Card, usize)> {
		let end = find_command(self.source, self.cursor, "end", "exercise")?;
		let body = &self.source[..end.start];

		let question = self.inner_block(body, ExercisePart::Question)?;
		let solution = self.inner_block(body, ExercisePart::Solution)?;

		let card = Card::new(
			self.counters.tag(),
			self.labels.front(BlockKind::Exercise, &self.source[question]),
			&self.source[solution],
		);

		Ok((card, end.end))
	}

	/// Locate the text between `\begin{part}` and `\end{part}` inside `body`.
	/// Both commands are searched for independently from the cursor, so an
	/// `\end` that comes first is reported as a malformed exercise.
	fn inner_block(&self, body: &str, part: ExercisePart) -> CardResult<Range<usize>> {
		let environment = part.environment();
		let begin = find_command(body, self.cursor, "begin", environment)?;
		let end = find_command(body, self.cursor, "end", environment)?;

		if begin.end > end.start {
			return Err(CardError::MalformedExercise {
				tag: self.counters.tag().to_string(),
				part,
				span: (end.start..begin.end).into(),
			});
		}

		Ok(begin.end..end.start)
	}
}
