//! End-to-end integration tests
//!
//! These tests validate the complete pipeline using predefined CSV fixtures.
//! Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Replays every row through the ledger engine with a fixed "today"
//! 3. Writes the selected report to a temporary file
//! 4. Compares the report with expected.csv
//!
//! Fixtures are located in tests/fixtures/ and cover:
//! - A settled month with opening balance
//! - Overdue detection around the reference date
//! - An empty ledger
//! - Malformed rows and fields
//! - The per-entry listing

#[cfg(test)]
mod tests {
    use cashflow_ledger::cli::ReportType;
    use cashflow_ledger::io::parse_signed_amount;
    use cashflow_ledger::{FixedClock, LedgerError, LedgerPipeline, Period};
    use chrono::NaiveDate;
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn pipeline(opening_balance: &str, report: ReportType) -> LedgerPipeline<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        LedgerPipeline::new(FixedClock(today))
            .with_opening_balance(parse_signed_amount(opening_balance))
            .with_period(Period::new(2026, 10))
            .with_report(report)
    }

    /// Run a fixture and compare the report with expected.csv
    fn run_test_fixture(fixture_name: &str, opening_balance: &str, report: ReportType) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        pipeline(opening_balance, report.clone())
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to process entries: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (report: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, report, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("happy_path", "1000", ReportType::Summary)]
    #[case("overdue_detection", "0", ReportType::Summary)]
    #[case("empty_ledger", "", ReportType::Summary)]
    #[case("malformed_data", "not a number", ReportType::Summary)]
    #[case("entries_listing", "0", ReportType::Entries)]
    fn test_fixtures(
        #[case] fixture: &str,
        #[case] opening_balance: &str,
        #[case] report: ReportType,
    ) {
        run_test_fixture(fixture, opening_balance, report);
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let mut output = Vec::new();
        let result = pipeline("0", ReportType::Summary)
            .process(Path::new("tests/fixtures/does_not_exist.csv"), &mut output);

        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }
}
