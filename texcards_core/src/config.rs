use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::CardError;
use crate::CardResult;
use crate::ExportFormat;
use crate::ExportOptions;
use crate::ImportFormat;
use crate::Labels;
use crate::export::DEFAULT_PLACEHOLDER;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"texcards.toml",
	".texcards.toml",
	".config/texcards.toml",
];

/// Configuration loaded from a `texcards.toml` file.
///
/// ```toml
/// [import]
/// format = "tex"
///
/// [export]
/// format = "mnemosyne"
/// tag = "algebra"
/// placeholder = "TODO"
///
/// [labels]
/// theorem = "Theorem"
/// lemma = "Lemma"
/// ```
///
/// Every section is optional. Command line flags take precedence over the
/// values found here.
#[derive(Debug, Default, Deserialize)]
pub struct TexcardsConfig {
	/// Input settings.
	#[serde(default)]
	pub import: ImportConfig,
	/// Output settings.
	#[serde(default)]
	pub export: ExportConfig,
	/// Label overrides for the front of each card kind.
	#[serde(default)]
	pub labels: Labels,
}

/// The `[import]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportConfig {
	/// Input format used when `--import-format` is not passed.
	#[serde(default)]
	pub format: Option<ImportFormat>,
}

/// The `[export]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
	/// Output format used when `--export-format` is not passed.
	#[serde(default)]
	pub format: Option<ExportFormat>,
	/// Global tag segment used when `--tag` is not passed.
	#[serde(default)]
	pub tag: Option<String>,
	/// Replacement for an empty card back. Defaults to `FIXME`.
	#[serde(default)]
	pub placeholder: Option<String>,
}

impl TexcardsConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> CardResult<Option<TexcardsConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		debug!(path = %config_path.display(), "loading config");

		let content = std::fs::read_to_string(&config_path)?;
		let config: TexcardsConfig =
			toml::from_str(&content).map_err(|e| CardError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Build export options, letting explicit values win over the config.
	pub fn export_options(
		&self,
		format: Option<ExportFormat>,
		global_tag: Option<String>,
	) -> ExportOptions {
		ExportOptions {
			format: format.or(self.export.format).unwrap_or_default(),
			global_tag: global_tag
				.or_else(|| self.export.tag.clone())
				.unwrap_or_default(),
			placeholder: self
				.export
				.placeholder
				.clone()
				.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
		}
	}

	/// The import format, letting an explicit value win over the config.
	pub fn import_format(&self, format: Option<ImportFormat>) -> ImportFormat {
		format.or(self.import.format).unwrap_or_default()
	}
}
