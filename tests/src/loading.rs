#![cfg(test)]
use indicators_common::error::LoadError;
use indicators_common::record::Record;
use indicators_core::loader;

use crate::common::{row, write_csv};

#[test]
fn loads_valid_rows_in_order() -> anyhow::Result<()> {
    let (_dir, path) = write_csv(&[
        row("Angola", 2000, "0.048", "45.2"),
        row("Austria", 2000, "0.01", "78.1"),
    ])?;

    let dataset = loader::load_countries(&path)?;

    let names: Vec<&str> = dataset.iter().map(Record::country).collect();
    assert_eq!(names, ["Angola", "Austria"]);
    assert_eq!(dataset.records()[0].life_expectancy(), 45.2);
    Ok(())
}

#[test]
fn duplicate_country_keeps_first_year() -> anyhow::Result<()> {
    let (_dir, path) = write_csv(&[
        row("Angola", 2000, "0.048", "45.2"),
        row("Angola", 2001, "0.047", "45.9"),
    ])?;

    let dataset = loader::load_countries(&path)?;

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].birth_rate(), 0.048);
    assert_eq!(dataset.records()[0].life_expectancy(), 45.2);
    Ok(())
}

#[test]
fn rejected_rows_are_absent() -> anyhow::Result<()> {
    let (_dir, path) = write_csv(&[
        row("Letters", 2000, "abc", "70.0"),
        "Short,2000,0.02,1,2,3,4,5,6,7".to_string(),
        row("Zero", 2000, "0", "70.0"),
        row("Blank", 2000, "", "70.0"),
        row("NoLife", 2000, "0.02", ""),
        row("Kept", 2000, "0.02", "70.0"),
    ])?;

    let dataset = loader::load_countries(&path)?;

    assert_eq!(dataset.len(), 1);
    assert!(dataset.contains("Kept"));
    for gone in ["Letters", "Short", "Zero", "Blank", "NoLife"] {
        assert!(!dataset.contains(gone), "{gone} should have been skipped");
    }
    Ok(())
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = loader::load_countries(dir.path().join("nope.csv"));

    assert!(matches!(result, Err(LoadError::Open { .. })));
}

#[test]
fn missing_file_reports_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let mut err: Vec<u8> = Vec::new();

    let dataset = loader::load_or_report(dir.path().join("nope.csv"), &mut err);

    assert!(dataset.is_empty());
    let err = String::from_utf8(err).unwrap();
    assert_eq!(err.lines().count(), 1);
    assert!(err.starts_with("Error: File not found - "));
    assert!(err.contains("nope.csv"));
}

#[test]
fn empty_file_loads_nothing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "")?;

    assert!(loader::load_countries(&path)?.is_empty());
    Ok(())
}
