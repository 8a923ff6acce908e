use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const STONE_EN: &str = r#"{ "block.minecraft.stone": "Stone" }"#;
const STONE_DE: &str = r#"{ "block.minecraft.stone": "Stein" }"#;
const TILES: &str = "tile.dirt.name=Dirt\ntile.wood.name=Wood\n";

fn stone_project() -> Result<CliTest> {
    CliTest::with_locales(&[
        ("en_us", "en_US", STONE_EN, TILES),
        ("de_de", "de_DE", STONE_DE, TILES),
    ])
}

#[test]
fn test_single_merge_inserts_in_sorted_position() -> Result<()> {
    let test = stone_project()?;

    let output = test
        .merge_command()
        .args(["s", "block.minecraft.stone", "tile.stone.name"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("lang_bedrock/en_US.lang")?,
        "tile.dirt.name=Dirt\ntile.stone.name=Stone\ntile.wood.name=Wood\n"
    );
    assert_eq!(
        test.read_file("lang_bedrock/de_DE.lang")?,
        "tile.dirt.name=Dirt\ntile.stone.name=Stein\t#\ntile.wood.name=Wood\n"
    );
    assert!(stdout(&output).contains("Task completed successfully!"));

    Ok(())
}

#[test]
fn test_multiple_expansion_writes_every_word() -> Result<()> {
    let test = CliTest::with_locales(&[(
        "en_us",
        "en_US",
        r#"{
            "block.minecraft.oak_planks": "Oak Planks",
            "block.minecraft.birch_planks": "Birch Planks"
        }"#,
        "item.apple.name=Apple\ntile.dirt.name=Dirt\ntile.stone.name=Stone\n",
    )])?;
    test.write_file("multiple.txt", "oak oak\nbirch birch\n")?;

    let output = test
        .merge_command()
        .args(["m", "block.minecraft.VAR_planks", "tile.planks.VAR.name"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("lang_bedrock/en_US.lang")?,
        "item.apple.name=Apple\n\
         tile.dirt.name=Dirt\n\
         tile.planks.oak.name=Oak Planks\n\
         tile.planks.birch.name=Birch Planks\n\
         tile.stone.name=Stone\n"
    );

    Ok(())
}

#[test]
fn test_missing_definition_is_skipped_with_warning() -> Result<()> {
    let test = CliTest::with_locales(&[(
        "en_us",
        "en_US",
        r#"{ "block.minecraft.oak_planks": "Oak Planks" }"#,
        "tile.stone.name=Stone\n",
    )])?;
    test.write_file("multiple.txt", "oak oak birch birch")?;

    let output = test
        .merge_command()
        .args(["multiple", "block.minecraft.VAR_planks", "tile.planks.VAR.name"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("lang_bedrock/en_US.lang")?,
        "tile.planks.oak.name=Oak Planks\ntile.stone.name=Stone\n"
    );
    let err = stderr(&output);
    assert!(err.contains("missing-source-key"));
    assert!(err.contains(
        "skipped missing definition block.minecraft.birch_planks -> tile.planks.birch.name"
    ));

    Ok(())
}

#[test]
fn test_prefix_section_token_and_end_of_file_insert() -> Result<()> {
    let test = CliTest::with_locales(&[("de_de", "de_DE", r#"{ "x.y": "Hallo" }"#, "")])?;

    let output = test
        .merge_command()
        .args(["s", "x.y", "z.y", "SECTIONe", "NULL"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("lang_bedrock/de_DE.lang")?,
        "\nz.y=\u{a7}eHallo\t#\n"
    );
    assert!(stderr(&output).contains("inserted-at-end"));

    Ok(())
}

#[test]
fn test_sort_override_keeps_entries_in_section() -> Result<()> {
    let test = CliTest::with_locales(&[(
        "en_us",
        "en_US",
        r#"{ "block.zinc": "Zinc" }"#,
        "## Blocks\ntile.a=1\ntile.c=1\n\n## Items\nitem.a=1\n",
    )])?;

    let output = test
        .merge_command()
        .args(["s", "block.zinc", "tile.z", "NULL", "NULL", "## Blocks"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("lang_bedrock/en_US.lang")?,
        "## Blocks\ntile.a=1\ntile.c=1\ntile.z=Zinc\n\n## Items\nitem.a=1\n"
    );

    Ok(())
}

#[test]
fn test_dry_run_leaves_files_untouched() -> Result<()> {
    let test = stone_project()?;

    let output = test
        .merge_command()
        .args(["s", "block.minecraft.stone", "tile.stone.name", "--dry-run"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("lang_bedrock/en_US.lang")?, TILES);
    assert_eq!(test.read_file("lang_bedrock/de_DE.lang")?, TILES);

    let out = stdout(&output);
    assert!(out.contains("+ tile.stone.name=Stone"));
    assert!(out.contains("+ tile.stone.name=Stein\\t#"));
    assert!(out.contains("Would insert 2 line(s) in 2 files."));

    Ok(())
}

#[test]
fn test_second_merge_reports_duplicates() -> Result<()> {
    let test = stone_project()?;
    let args = ["s", "block.minecraft.stone", "tile.stone.name"];

    assert!(test.merge_command().args(args).output()?.status.success());
    let output = test.merge_command().args(args).output()?;

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("duplicate definition of tile.stone.name"));
    assert!(err.contains("en_US.lang:2"));
    assert_eq!(
        test.read_file("lang_bedrock/en_US.lang")?,
        "tile.dirt.name=Dirt\ntile.stone.name=Stone\ntile.stone.name=Stone\ntile.wood.name=Wood\n"
    );

    Ok(())
}

#[test]
fn test_strict_mode_fails_on_duplicates() -> Result<()> {
    let test = stone_project()?;
    let args = ["s", "block.minecraft.stone", "tile.stone.name"];
    assert!(test.merge_command().args(args).output()?.status.success());
    let before = test.read_file("lang_bedrock/en_US.lang")?;

    let output = test.merge_command().args(args).arg("--strict").output()?;

    assert_eq!(output.status.code(), Some(244));
    assert_eq!(test.read_file("lang_bedrock/en_US.lang")?, before);

    Ok(())
}

#[test]
fn test_config_file_changes_layout_and_default_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".langmergerc.json",
        r#"{ "sourceDir": "java", "targetDir": "bedrock", "defaultLocale": "de_DE" }"#,
    )?;
    test.write_file("languages.txt", "de_de de_DE\n")?;
    test.write_file("java/de_de.json", STONE_DE)?;
    test.write_file("bedrock/de_DE.lang", TILES)?;

    let output = test
        .merge_command()
        .args(["s", "block.minecraft.stone", "tile.stone.name"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("bedrock/de_DE.lang")?,
        "tile.dirt.name=Dirt\ntile.stone.name=Stein\ntile.wood.name=Wood\n"
    );

    Ok(())
}

#[test]
fn test_default_locale_flag() -> Result<()> {
    let test = stone_project()?;

    let output = test
        .merge_command()
        .args(["s", "block.minecraft.stone", "tile.stone.name"])
        .args(["--default-locale", "de_DE"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(
        test.read_file("lang_bedrock/en_US.lang")?
            .contains("tile.stone.name=Stone\t#\n")
    );
    assert!(
        test.read_file("lang_bedrock/de_DE.lang")?
            .contains("tile.stone.name=Stein\n")
    );

    Ok(())
}

#[test]
fn test_root_flag() -> Result<()> {
    let test = stone_project()?;
    let elsewhere = CliTest::new()?;

    let output = elsewhere
        .merge_command()
        .args(["s", "block.minecraft.stone", "tile.stone.name", "--root"])
        .arg(test.root())
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(
        test.read_file("lang_bedrock/en_US.lang")?
            .contains("tile.stone.name=Stone\n")
    );

    Ok(())
}

#[test]
fn test_verbose_lists_settings_and_identifiers() -> Result<()> {
    let test = CliTest::with_locales(&[(
        "en_us",
        "en_US",
        r#"{ "block.minecraft.white_wool": "White Wool" }"#,
        "tile.wool.name=Wool\n",
    )])?;
    test.write_file("colors_classic.txt", "white white\n")?;

    let output = test
        .merge_command()
        .args(["c", "block.minecraft.VAR_wool", "tile.wool.VAR.name", "-v"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("mode:          classic-color"));
    assert!(out.contains("block.minecraft.white_wool -> tile.wool.white.name"));
    assert!(out.contains("Merged en_us -> en_US (1 definition(s) read from"));
    assert!(out.contains("1 line(s) in"));
    assert!(out.contains("Wrote"));

    Ok(())
}

#[test]
fn test_help_exits_zero() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.command().arg("--help").output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

// Exit codes are the low byte of the negative failure codes.

#[test]
fn test_missing_arguments_exit_code() -> Result<()> {
    let test = stone_project()?;
    let output = test.merge_command().args(["s", "only.one"]).output()?;
    assert_eq!(output.status.code(), Some(255));
    Ok(())
}

#[test]
fn test_missing_languages_list_exit_code() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.merge_command().args(["s", "a.b", "c.d"]).output()?;
    assert_eq!(output.status.code(), Some(254));
    assert!(stderr(&output).contains("languages list"));
    Ok(())
}

#[test]
fn test_odd_languages_list_exit_code() -> Result<()> {
    let test = stone_project()?;
    test.write_file("languages.txt", "en_us en_US de_de\n")?;
    let output = test.merge_command().args(["s", "a.b", "c.d"]).output()?;
    assert_eq!(output.status.code(), Some(254));
    Ok(())
}

#[test]
fn test_missing_word_list_exit_code() -> Result<()> {
    let test = stone_project()?;
    let output = test.merge_command().args(["n", "a.VAR", "c.VAR"]).output()?;
    assert_eq!(output.status.code(), Some(253));
    Ok(())
}

#[test]
fn test_placeholder_missing_exit_codes() -> Result<()> {
    let test = stone_project()?;
    test.write_file("multiple.txt", "oak oak\n")?;

    let source = test.merge_command().args(["m", "a.b", "c.VAR"]).output()?;
    assert_eq!(source.status.code(), Some(252));

    let target = test.merge_command().args(["m", "a.VAR", "c.d"]).output()?;
    assert_eq!(target.status.code(), Some(251));
    Ok(())
}

#[test]
fn test_missing_source_file_exit_code() -> Result<()> {
    let test = stone_project()?;
    test.write_file("languages.txt", "fr_fr fr_FR\n")?;
    let output = test
        .merge_command()
        .args(["s", "block.minecraft.stone", "tile.stone.name"])
        .output()?;
    assert_eq!(output.status.code(), Some(250));
    Ok(())
}

#[test]
fn test_no_matches_exit_code() -> Result<()> {
    let test = stone_project()?;
    let output = test
        .merge_command()
        .args(["s", "block.minecraft.granite", "tile.granite.name"])
        .output()?;
    assert_eq!(output.status.code(), Some(249));
    assert!(stderr(&output).contains("no matching definitions"));
    assert_eq!(test.read_file("lang_bedrock/en_US.lang")?, TILES);
    Ok(())
}

#[test]
fn test_missing_target_file_exit_code() -> Result<()> {
    let test = stone_project()?;
    test.write_file("languages.txt", "en_us en_GB\n")?;
    let output = test
        .merge_command()
        .args(["s", "block.minecraft.stone", "tile.stone.name"])
        .output()?;
    assert_eq!(output.status.code(), Some(247));
    Ok(())
}

#[test]
fn test_unknown_mode_exit_code() -> Result<()> {
    let test = stone_project()?;
    let output = test.merge_command().args(["x", "a.b", "c.d"]).output()?;
    assert_eq!(output.status.code(), Some(246));
    assert!(stderr(&output).contains("Expansion type \"x\" not recognized"));
    Ok(())
}

#[test]
fn test_invalid_config_exit_code() -> Result<()> {
    let test = stone_project()?;
    test.write_file(".langmergerc.json", "{ not json")?;
    let output = test
        .merge_command()
        .args(["s", "block.minecraft.stone", "tile.stone.name"])
        .output()?;
    assert_eq!(output.status.code(), Some(243));
    Ok(())
}

#[test]
fn test_earlier_locales_stay_written_after_failure() -> Result<()> {
    let test = stone_project()?;
    test.write_file("languages.txt", "en_us en_US fr_fr fr_FR\n")?;

    let output = test
        .merge_command()
        .args(["s", "block.minecraft.stone", "tile.stone.name"])
        .output()?;

    assert_eq!(output.status.code(), Some(250));
    assert!(
        test.read_file("lang_bedrock/en_US.lang")?
            .contains("tile.stone.name=Stone\n")
    );
    Ok(())
}
