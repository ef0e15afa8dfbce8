mod support;

use expensetrack_client::commands::export::{self, ExportRunOptions};
use expensetrack_client::commands::search::{self, SearchRunOptions};
use support::ledger_testkit::{
    september_ledger, string_field, temp_home_in_tmp, write_fixture_text, write_home_records,
};

#[test]
fn missing_records_file_reports_records_not_found() {
    let temp = temp_home_in_tmp("expensetrack-missing");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let result = search::run_with_options(SearchRunOptions {
            records: None,
            query: String::new(),
            home_override: Some(&home),
        });
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "records_not_found");
            assert!(!error.recovery_steps.is_empty());
        }
    }
}

#[test]
fn explicit_csv_records_path_overrides_home() {
    let temp = temp_home_in_tmp("expensetrack-csv");
    assert!(temp.is_ok());
    if let Ok((dir, home)) = temp {
        let csv = "id,date,amount,type,merchant,isExpense\n\
                   c1,09/01/2024,10.00,debit,Grocer,true\n\
                   c2,09/05/2024,3.20,debit,Cafe,true\n";
        let path = write_fixture_text(dir.path(), "rows.csv", csv);
        assert!(path.is_ok());
        if let Ok(path) = path {
            let result = search::run_with_options(SearchRunOptions {
                records: Some(path.display().to_string()),
                query: String::new(),
                home_override: Some(&home),
            });
            assert!(result.is_ok());
            if let Ok(envelope) = result {
                assert_eq!(envelope.data["match_count"], 2);
                assert_eq!(
                    string_field(&envelope.data, "/rows/0/id").as_deref(),
                    Some("c2")
                );
                assert_eq!(
                    string_field(&envelope.data, "/source/path"),
                    Some(path.display().to_string())
                );
            }
        }
    }
}

#[test]
fn invalid_rows_fail_the_whole_load() {
    let temp = temp_home_in_tmp("expensetrack-invalid");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let body = r#"[{"id":"a","date":"09/01/2024","amount":"-3","type":"debit"}]"#;
        assert!(write_fixture_text(&home, "transactions.json", body).is_ok());
        let result = search::run_with_options(SearchRunOptions {
            records: None,
            query: String::new(),
            home_override: Some(&home),
        });
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "records_validation_failed");
        }
    }
}

#[test]
fn export_without_output_returns_csv_text() {
    let temp = temp_home_in_tmp("expensetrack-export");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        assert!(write_home_records(&home, &september_ledger()).is_ok());
        let result = export::run_with_options(ExportRunOptions {
            records: None,
            output: None,
            home_override: Some(&home),
        });
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            assert_eq!(envelope.data["rows_written"], 7);
            assert!(envelope.data.get("output_path").is_none());
            let csv = string_field(&envelope.data, "/csv").unwrap_or_default();
            let mut lines = csv.lines();
            assert_eq!(
                lines.next(),
                Some(
                    "Created At,Institution,Account,Merchant,Amount,Type,Category,Is Transfer,Is Expense,Is Edited"
                )
            );
            assert_eq!(
                lines.next(),
                Some(
                    "09/04/2024,HSBC HONG KONG,Visa HSBC HONG KONG,Cinema,15.00,debit,Shopping,false,true,false"
                )
            );
        }
    }
}

#[test]
fn export_with_output_writes_the_file() {
    let temp = temp_home_in_tmp("expensetrack-export-file");
    assert!(temp.is_ok());
    if let Ok((dir, home)) = temp {
        assert!(write_home_records(&home, &september_ledger()).is_ok());
        let output = dir.path().join("export.csv");
        let result = export::run_with_options(ExportRunOptions {
            records: None,
            output: Some(output.display().to_string()),
            home_override: Some(&home),
        });
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            assert!(envelope.data.get("csv").is_none());
            let written = std::fs::read_to_string(&output);
            assert!(written.is_ok());
            if let Ok(body) = written {
                assert_eq!(body.lines().count(), 8);
            }
        }
    }
}

#[test]
fn export_into_missing_directory_reports_export_failed() {
    let temp = temp_home_in_tmp("expensetrack-export-fail");
    assert!(temp.is_ok());
    if let Ok((dir, home)) = temp {
        assert!(write_home_records(&home, &september_ledger()).is_ok());
        let output = dir.path().join("missing").join("export.csv");
        let result = export::run_with_options(ExportRunOptions {
            records: None,
            output: Some(output.display().to_string()),
            home_override: Some(&home),
        });
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "export_failed");
        }
    }
}
