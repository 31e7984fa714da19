use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use miette::IntoDiagnostic;
use miette::NamedSource;
use miette::WrapErr;
use owo_colors::OwoColorize;
use texcards_cli::TexcardsCli;
use texcards_core::CardError;
use texcards_core::TexcardsConfig;
use texcards_core::export_cards;
use texcards_core::import_cards;
use tracing::debug;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = TexcardsCli::parse();

	// Respect NO_COLOR env var, --no-color flag and non-terminal stderr.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stderr).is_some();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose, use_color);

	if let Err(report) = run(&args) {
		eprintln!("{report:?}");
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_directives = if verbose {
		"texcards=debug,texcards_core=debug"
	} else {
		"warn"
	};
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directives));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init();
}

fn resolve_root(args: &TexcardsCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Attach the document to an extraction error so spans render with line and
/// column context.
fn with_source(error: CardError, file: &Path, source: String) -> miette::Report {
	miette::Report::new(error)
		.with_source_code(NamedSource::new(file.display().to_string(), source))
}

fn run(args: &TexcardsCli) -> miette::Result<()> {
	let root = resolve_root(args);
	debug!(root = %root.display(), "resolved project root");

	let config = TexcardsConfig::load(&root)?.unwrap_or_default();

	let file = root.join(&args.file);
	let source = std::fs::read_to_string(&file)
		.into_diagnostic()
		.wrap_err_with(|| format!("failed to read `{}`", file.display()))?;

	let format = config.import_format(args.import_format.map(Into::into));
	debug!(file = %file.display(), ?format, "importing cards");

	let cards = match import_cards(format, &source, &config.labels) {
		Ok(cards) => cards,
		Err(error) => return Err(with_source(error, &file, source)),
	};

	if cards.is_empty() {
		eprintln!(
			"{} no cards found in {}",
			colored!("warning:", yellow),
			file.display()
		);
	}

	let options = config.export_options(args.export_format.map(Into::into), args.tag.clone());
	debug!(format = ?options.format, global_tag = %options.global_tag, "exporting cards");

	let mut stdout = std::io::stdout().lock();
	export_cards(&mut stdout, &cards, &options)?;
	stdout.flush().into_diagnostic()?;

	if args.verbose {
		eprintln!(
			"{} {} card(s) from {}",
			colored!("Exported", green),
			cards.len(),
			file.display()
		);
	}

	Ok(())
}
