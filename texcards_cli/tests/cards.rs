mod common;

use clap::Parser;
use serde_json::Value;
use texcards_cli::ExportFormatArg;
use texcards_cli::ImportFormatArg;
use texcards_cli::TexcardsCli;
use texcards_core::AnyEmptyResult;

#[test]
fn exports_anki_by_default() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("main.tex"), common::GROUP_NOTES)?;

	common::texcards_in(tmp.path())
		.assert()
		.success()
		.stdout("[latex]Définition: Group[/latex]\t[latex] A set. [/latex]\t1::1::1\n");

	Ok(())
}

#[test]
fn exports_mnemosyne_with_global_tag() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("notes.tex"), common::GROUP_NOTES)?;

	common::texcards_in(tmp.path())
		.args(["--file", "notes.tex", "--export-format", "mnemosyne", "--tag", "algebra"])
		.assert()
		.success()
		.stdout("<latex>Définition: Group</latex>\t<latex> A set. </latex>\talgebra::1::1::1\n");

	Ok(())
}

#[test]
fn exports_txt() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("main.tex"), common::GROUP_NOTES)?;

	common::texcards_in(tmp.path())
		.args(["--export-format", "txt"])
		.assert()
		.success()
		.stdout("------------------\n1::1::1\n\nDéfinition: Group\n\n\nA set.\n\n");

	Ok(())
}

#[test]
fn exports_json() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("main.tex"), common::GROUP_NOTES)?;

	let output = common::texcards_in(tmp.path())
		.args(["--export-format", "json", "--tag", "algebra"])
		.output()?;
	assert!(output.status.success());

	let cards: Value = serde_json::from_slice(&output.stdout)?;
	let cards = cards.as_array().ok_or("expected a json array")?;
	assert_eq!(cards.len(), 1);
	assert_eq!(cards[0]["tag"], "algebra::1::1::1");
	assert_eq!(cards[0]["front"], "Définition: Group");
	assert_eq!(cards[0]["back"], "\nA set.\n");

	Ok(())
}

#[test]
fn imports_delimited_records() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("cards.tex"),
		"% --- CARD ---\nalgebra\n% ------------\nWhat is a group?\n% ------------\nA monoid with \
		 inverses.\n",
	)?;

	common::texcards_in(tmp.path())
		.args(["--file", "cards.tex", "--import-format", "delim"])
		.assert()
		.success()
		.stdout("[latex]What is a group?[/latex]\t[latex]A monoid with inverses.[/latex]\talgebra\n");

	Ok(())
}

#[test]
fn config_file_sets_defaults() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("main.tex"), common::GROUP_NOTES)?;
	std::fs::write(
		tmp.path().join("texcards.toml"),
		"[export]\nformat = \"mnemosyne\"\ntag = \"alg\"\n\n[labels]\ndefinition = \"Definition\"\n",
	)?;

	common::texcards_in(tmp.path())
		.assert()
		.success()
		.stdout("<latex>Definition: Group</latex>\t<latex> A set. </latex>\talg::1::1::1\n");

	Ok(())
}

#[test]
fn flags_override_config_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("main.tex"), common::GROUP_NOTES)?;
	std::fs::write(
		tmp.path().join("texcards.toml"),
		"[export]\nformat = \"mnemosyne\"\ntag = \"alg\"\n",
	)?;

	common::texcards_in(tmp.path())
		.args(["--export-format", "anki", "--tag", "geo"])
		.assert()
		.success()
		.stdout("[latex]Définition: Group[/latex]\t[latex] A set. [/latex]\tgeo::1::1::1\n");

	Ok(())
}

#[test]
fn invalid_config_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("main.tex"), common::GROUP_NOTES)?;
	std::fs::write(tmp.path().join("texcards.toml"), "[export\n")?;

	common::texcards_in(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}

#[test]
fn unterminated_block_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("main.tex"),
		"\\section{A}\n\\begin{theorem}[T]\nno end\n",
	)?;

	common::texcards_in(tmp.path())
		.assert()
		.code(2)
		.stdout("")
		.stderr(predicates::str::contains("cannot get theorem"));

	Ok(())
}

#[test]
fn missing_document_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::texcards_in(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to read"));

	Ok(())
}

#[test]
fn document_without_cards_warns() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("main.tex"), "\\section{Empty}\nNothing here.\n")?;

	common::texcards_in(tmp.path())
		.assert()
		.success()
		.stdout("")
		.stderr(predicates::str::contains("no cards found"));

	Ok(())
}

#[test]
fn verbose_reports_card_count() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("main.tex"), common::GROUP_NOTES)?;

	common::texcards_in(tmp.path())
		.arg("--verbose")
		.assert()
		.success()
		.stderr(predicates::str::contains("Exported 1 card(s)"));

	Ok(())
}

#[test]
fn rejects_unknown_export_format() {
	common::texcards_cmd()
		.args(["--export-format", "csv"])
		.assert()
		.failure()
		.stderr(predicates::str::contains("invalid value"));
}

#[test]
fn cli_defaults() {
	let cli = TexcardsCli::parse_from(["texcards"]);
	assert_eq!(cli.file, std::path::PathBuf::from("main.tex"));
	assert!(cli.import_format.is_none());
	assert!(cli.export_format.is_none());
	assert!(cli.tag.is_none());
	assert!(!cli.verbose);
	assert!(!cli.no_color);
}

#[test]
fn cli_parses_formats() {
	let cli = TexcardsCli::parse_from([
		"texcards",
		"-f",
		"notes.tex",
		"--import-format",
		"delim",
		"--export-format",
		"mnemosyne",
		"-t",
		"algebra",
	]);
	assert_eq!(cli.file, std::path::PathBuf::from("notes.tex"));
	assert_eq!(cli.import_format, Some(ImportFormatArg::Delim));
	assert_eq!(cli.export_format, Some(ExportFormatArg::Mnemosyne));
	assert_eq!(cli.tag.as_deref(), Some("algebra"));
}
