use assert_cmd::prelude::*; // Add methods on commands
use assert_fs::{prelude::*, NamedTempFile};
use predicates::prelude::*;
use std::process::Command; // Run programs
use test_log::test;

const BIN: &str = "cln";

fn cities() -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("cities.csv")?;
    file.write_str("id,city\n1,Dresden\n2,NA\n3,Leipzig\n4,Dresden\n5,Bonn\n")?;
    Ok(file)
}

#[cfg_attr(miri, ignore)]
#[test]
fn cli_argument_parsing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-vvv").arg("Non-existing-file.csv").arg("print");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No such file or directory"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-h");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Print help"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains(BIN));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-v").arg("-q").arg("file.csv").arg("print");
    cmd.assert().failure().stderr(predicate::str::contains(
        "argument '--verbose...' cannot be used with '--quiet'",
    ));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--log").arg("cats").arg("file.csv").arg("print");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("'--log <LOG_LEVEL>'"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--encoding").arg("bitmap").arg("file.csv").arg("print");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("'--encoding <ENCODING>'"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn summary() -> Result<(), Box<dyn std::error::Error>> {
    let file = cities()?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--column").arg("city").arg(file.path()).arg("summary");
    cmd.assert().success().stdout(predicate::str::diff(
        "Column: city\nMeasure  Value\nCount    5\nMissing  1\n",
    ));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn queries() -> Result<(), Box<dyn std::error::Error>> {
    let file = cities()?;

    for encoding in ["plain", "dictionary"] {
        let mut cmd = Command::cargo_bin(BIN)?;
        cmd.args(["-c", "city", "-e", encoding])
            .arg(file.path())
            .args(["count", "Dresden"]);
        cmd.assert().success().stdout(predicate::str::diff("2\n"));

        cmd = Command::cargo_bin(BIN)?;
        cmd.args(["-c", "city", "-e", encoding])
            .arg(file.path())
            .args(["is-in", "Dresden", "Bonn"]);
        cmd.assert().success().stdout(predicate::str::diff("0\n3\n4\n"));

        cmd = Command::cargo_bin(BIN)?;
        cmd.args(["-c", "city", "-e", encoding])
            .arg(file.path())
            .args(["is-not-in", "Dresden", "Bonn"]);
        cmd.assert().success().stdout(predicate::str::diff("1\n2\n"));

        cmd = Command::cargo_bin(BIN)?;
        cmd.args(["-c", "city", "-e", encoding])
            .arg(file.path())
            .arg("unique");
        cmd.assert()
            .success()
            .stdout(predicate::str::starts_with("city Unique values\n"))
            .stdout(predicate::str::contains("Leipzig").and(predicate::str::contains("Bonn")));
    }
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn window_and_ordering() -> Result<(), Box<dyn std::error::Error>> {
    let file = cities()?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(file.path()).args(["lag", "2"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("id lag(2)\n\n\n1\n2\n3\n"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg(file.path()).args(["lead", "-1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("id lead(-1)\n\n1\n2\n3\n4\n"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-c", "1", "-e", "dictionary"])
        .arg(file.path())
        .args(["sort", "--descending"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("city\nLeipzig\nDresden\nDresden\nBonn\n\n"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-c", "city"])
        .arg(file.path())
        .arg("remove-missing");
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("city\nDresden\nLeipzig\nDresden\nBonn\n"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn input_options() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("plain.tsv")?;
    file.write_str("x\t-\ny\tNA\n")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["--no-headers", "-d", "\t", "-c", "1", "--missing=-"])
        .arg(file.path())
        .arg("print");
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("column 1\n\nNA\n"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-c", "town"]).arg(file.path()).arg("print");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no column `town`"));
    Ok(())
}
