//! `texcards_core` is the core library for texcards. It turns LaTeX course
//! notes into flashcards for spaced-repetition tools such as Anki and
//! Mnemosyne.
//!
//! ## Processing Pipeline
//!
//! ```text
//! LaTeX document
//!   → Scanner (finds the next `\command{qualifier}[argument]`, skipping `$...$` and `\\`)
//!   → Extractor (tracks \section / \subsection / \subsubsection, dispatches known environments)
//!   → Block handlers (match `\begin{kind}` to `\end{kind}`, slice out the card text)
//!   → Exporter (anki, mnemosyne, txt or json)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `texcards.toml`: default formats, global tag and labels.
//! - [`scanner`]: The command scanner and the block boundary matcher.
//!
//! ## Key Types
//!
//! - [`Card`]: One flashcard with its tag, front and back.
//! - [`BlockKind`]: The environments that produce cards: definitions, theorems, lemmas, proofs and exercises.
//! - [`Labels`]: The label written before each card's title, e.g. `Théorème`.
//! - [`CardError`]: Errors with byte spans that render as `miette` diagnostics.
//!
//! ## Recognized Markup
//!
//! ```latex
//! \section{Groups}
//! \subsection{Morphisms}
//!
//! \begin{theorem}[First isomorphism theorem]
//!   $G / \ker f \cong \operatorname{im} f$
//! \end{theorem}
//!
//! \begin{exercise}
//! \begin{question} Show that $\ker f$ is normal. \end{question}
//! \begin{solution} Conjugate an element of the kernel. \end{solution}
//! \end{exercise}
//! ```
//!
//! Both cards are tagged `1::1::1`. Theorems and lemmas may also be spelled
//! `theo` and `lem`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use texcards_core::{ExportOptions, export_cards, extract};
//!
//! let source = std::fs::read_to_string("main.tex").unwrap();
//! let cards = extract(&source).unwrap();
//! export_cards(&mut std::io::stdout(), &cards, &ExportOptions::default()).unwrap();
//! ```

pub use card::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use extractor::*;
pub use import::*;
pub use tokens::Command;

mod card;
pub mod config;
#[allow(unused_assignments)]
mod error;
mod export;
mod extractor;
mod import;
pub mod scanner;
pub(crate) mod tokens;

#[cfg(test)]
mod __fixtures;
