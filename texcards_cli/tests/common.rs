use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

/// A single definition under one section, tagged `1::1::1`.
#[allow(dead_code)]
pub const GROUP_NOTES: &str = "\\section{Groups}\n\\begin{definition}[Group]\nA set.\n\\end{definition}\n";

pub fn texcards_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("texcards"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Run the binary against `root`, which holds the documents under test.
#[allow(dead_code)]
pub fn texcards_in(root: &Path) -> Command {
	let mut cmd = texcards_cmd();
	cmd.arg("--path").arg(root);
	cmd
}
