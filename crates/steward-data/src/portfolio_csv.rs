//! Portfolio CSV load and save.
//!
//! Schema: `Asset_Type, Amount_SGD, Fund_Name, Liquidity_Period_Days,
//! Notes`, one row per holding. Rows are validated as they are read; a bad
//! row fails the load with its row number rather than producing a partially
//! valid portfolio. An empty liquidity field falls back to the class
//! default from the risk-profile table.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::error::{DataError, DataResult};
use steward_portfolio::{AssetClass, AssetHolding, Portfolio};
use steward_risk::RiskProfileTable;

/// CSV header row, in file order.
const HEADERS: [&str; 5] = [
    "Asset_Type",
    "Amount_SGD",
    "Fund_Name",
    "Liquidity_Period_Days",
    "Notes",
];

/// CSV record for one holding row.
#[derive(Debug, Deserialize)]
struct HoldingRecord {
    #[serde(rename = "Asset_Type")]
    asset_type: String,

    #[serde(rename = "Amount_SGD")]
    amount_sgd: Decimal,

    #[serde(rename = "Fund_Name")]
    fund_name: String,

    #[serde(rename = "Liquidity_Period_Days")]
    liquidity_period_days: Option<u32>,

    #[serde(rename = "Notes")]
    notes: Option<String>,
}

/// Loads a portfolio from a CSV file.
///
/// The portfolio name is the file stem; the profile table supplies
/// class-default liquidity periods for rows that omit their own.
///
/// # Errors
///
/// Returns an error when the file cannot be read, a row fails to parse, an
/// asset-type code is unknown, or an amount is negative. Row errors carry
/// the 1-based data row number.
pub fn load_portfolio(path: impl AsRef<Path>, profiles: &RiskProfileTable) -> DataResult<Portfolio> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let mut reader =
        csv::Reader::from_path(path).map_err(|e| DataError::csv(display.clone(), e))?;

    let mut holdings = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let line = index + 1;
        let record: HoldingRecord =
            result.map_err(|e| DataError::row(display.clone(), line, e))?;

        let asset_class = AssetClass::from_code(&record.asset_type)
            .map_err(|e| DataError::row(display.clone(), line, e))?;

        let liquidity_days = record
            .liquidity_period_days
            .unwrap_or_else(|| profiles.default_liquidity_days(asset_class));

        let holding = AssetHolding::builder()
            .asset_class(asset_class)
            .amount(record.amount_sgd)
            .fund_name(record.fund_name)
            .liquidity_period_days(liquidity_days)
            .notes(record.notes.unwrap_or_default())
            .build()
            .map_err(|e| DataError::row(display.clone(), line, e))?;

        holdings.push(holding);
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "portfolio".to_string());

    info!(path = %path.display(), rows = holdings.len(), "loaded portfolio");

    Portfolio::builder(name)
        .add_holdings(holdings)
        .build()
        .map_err(DataError::from)
}

/// Saves a portfolio to a CSV file in the load schema.
///
/// Amounts are written in plain decimal notation, so a save/load pair
/// round-trips exactly.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn save_portfolio(portfolio: &Portfolio, path: impl AsRef<Path>) -> DataResult<()> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let mut writer =
        csv::Writer::from_path(path).map_err(|e| DataError::csv(display.clone(), e))?;

    writer
        .write_record(HEADERS)
        .map_err(|e| DataError::csv(display.clone(), e))?;

    for holding in &portfolio.holdings {
        let amount = holding.amount.to_string();
        let days = holding.liquidity_period_days.to_string();
        writer
            .write_record([
                holding.asset_class.code(),
                amount.as_str(),
                holding.fund_name.as_str(),
                days.as_str(),
                holding.notes.as_str(),
            ])
            .map_err(|e| DataError::csv(display.clone(), e))?;
    }

    writer
        .flush()
        .map_err(|e| DataError::io(display.clone(), e))?;

    info!(path = %path.display(), rows = portfolio.holding_count(), "saved portfolio");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const SAMPLE: &str = "\
Asset_Type,Amount_SGD,Fund_Name,Liquidity_Period_Days,Notes
Cash_Equivalent,200000,DBS Current,0,Operating float
MMF,1000000,Fullerton SGD Cash Fund,2,
Bond_Fund,350000,ABF Singapore Bond Fund,5,
Multi_Asset,550000,Balanced Growth Fund,30,Quarterly review
Time_Deposit,1300000,UOB 12M Fixed Deposit,180,Matures Dec
";

    #[test]
    fn test_load_sample() {
        let file = write_csv(SAMPLE);
        let portfolio = load_portfolio(file.path(), RiskProfileTable::standard()).unwrap();

        assert_eq!(portfolio.holding_count(), 5);
        assert_eq!(portfolio.total_value(), dec!(3_400_000));

        let deposit = &portfolio.holdings[4];
        assert_eq!(deposit.asset_class, AssetClass::TimeDeposit);
        assert_eq!(deposit.liquidity_period_days, 180);
        assert_eq!(deposit.notes, "Matures Dec");
    }

    #[test]
    fn test_empty_liquidity_uses_class_default() {
        let file = write_csv(
            "Asset_Type,Amount_SGD,Fund_Name,Liquidity_Period_Days,Notes\n\
             Time_Deposit,500000,Plain Deposit,,\n",
        );
        let portfolio = load_portfolio(file.path(), RiskProfileTable::standard()).unwrap();

        // Standard table default for time deposits.
        assert_eq!(portfolio.holdings[0].liquidity_period_days, 180);
    }

    #[test]
    fn test_unknown_asset_type_names_the_row() {
        let file = write_csv(
            "Asset_Type,Amount_SGD,Fund_Name,Liquidity_Period_Days,Notes\n\
             Cash_Equivalent,100,A,0,\n\
             Crypto,100,B,0,\n",
        );
        let err = load_portfolio(file.path(), RiskProfileTable::standard()).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("row 2"), "got: {msg}");
        assert!(msg.contains("Crypto"), "got: {msg}");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let file = write_csv(
            "Asset_Type,Amount_SGD,Fund_Name,Liquidity_Period_Days,Notes\n\
             MMF,-5000,Bad Fund,2,\n",
        );
        let err = load_portfolio(file.path(), RiskProfileTable::standard()).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_malformed_amount_rejected() {
        let file = write_csv(
            "Asset_Type,Amount_SGD,Fund_Name,Liquidity_Period_Days,Notes\n\
             MMF,lots,Bad Fund,2,\n",
        );
        assert!(load_portfolio(file.path(), RiskProfileTable::standard()).is_err());
    }

    #[test]
    fn test_round_trip() {
        let file = write_csv(SAMPLE);
        let original = load_portfolio(file.path(), RiskProfileTable::standard()).unwrap();

        let out = tempfile::NamedTempFile::new().unwrap();
        save_portfolio(&original, out.path()).unwrap();
        let reloaded = load_portfolio(out.path(), RiskProfileTable::standard()).unwrap();

        assert_eq!(original.holdings, reloaded.holdings);
        assert_eq!(original.total_value(), reloaded.total_value());
    }

    #[test]
    fn test_missing_file() {
        let err =
            load_portfolio("/nonexistent/portfolio.csv", RiskProfileTable::standard()).unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }
}
