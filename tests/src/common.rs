#![cfg(test)]
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const HEADER: &str = "Country Name,Year,Birth Rate,Business Tax Rate,CO2 Emissions,\
Days to Start Business,Energy Usage,GDP,Health Exp % GDP,Health Exp/Capita,Hours to do Tax,\
Infant Mortality Rate,Internet Usage,Lending Interest,Life Expectancy Female,Life Expectancy Male";

/// A 16 field data row. Columns other than country, birth rate and male life
/// expectancy hold plausible filler.
pub fn row(country: &str, year: u16, birth_rate: &str, life_expectancy: &str) -> String {
    format!("{country},{year},{birth_rate},38%,87,8,26998,54790058957,4%,$60,270,0.034,0.1,25%,71.0,{life_expectancy}")
}

/// Writes `rows` below [`HEADER`] into a fresh temporary directory.
pub fn write_csv(rows: &[String]) -> anyhow::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("WorldIndicators2000.csv");

    let mut text = String::from(HEADER);
    for r in rows {
        text.push('\n');
        text.push_str(r);
    }
    fs::write(&path, text)?;

    Ok((dir, path))
}
