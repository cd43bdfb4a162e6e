mod common;

use annexiv_rs::serialize_aggregate;
use common::{minimal_report, sample_report};

#[test]
fn empty_input_yields_empty_string() {
    assert_eq!(serialize_aggregate(&[]), "");
}

#[test]
fn single_fund_aggregate() {
    let xml = serialize_aggregate(&[sample_report()]);

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("ReportingMemberState=\"DE\">"));
    assert!(xml.contains("<AIFMName>Test KVG GmbH</AIFMName>"));
    assert!(xml.contains("<AIFRecordInfo_FundName>Test Immobilien Fonds I</AIFRecordInfo_FundName>"));
    assert!(xml.contains("<AIFRecordInfo_FundCode>DE-TEST-001</AIFRecordInfo_FundCode>"));
    assert!(xml.contains("<Disclaimer>Test disclaimer text.</Disclaimer>"));
    assert!(xml.ends_with("</AIFReportingInfo>"));
}

#[test]
fn aggregate_root_omits_schema_location() {
    let xml = serialize_aggregate(&[sample_report()]);
    assert!(!xml.contains("schemaLocation"));
    assert!(xml.contains("xmlns=\"urn:esma:xsd:aifmd-reporting\""));
}

#[test]
fn manager_block_derives_from_first_report_only() {
    let mut second = sample_report();
    second.identification.fund_name = "Second Fund".into();
    second.identification.manager_name = Some("Other KVG".into());
    second.identification.domicile = "Luxembourg".into();

    let xml = serialize_aggregate(&[minimal_report(), second]);

    // First report drives the manager header, member state and period.
    assert!(xml.contains("<AIFMName>Not specified</AIFMName>"));
    assert!(xml.contains("ReportingMemberState=\"DE\">"));
    assert!(xml.contains("<ReportingPeriodType>Q4</ReportingPeriodType>"));
    assert!(!xml.contains("Other KVG"));
    // But every fund contributes its marker record.
    assert!(xml.contains("<AIFRecordInfo_FundName>Minimal Fund</AIFRecordInfo_FundName>"));
    assert!(xml.contains("<AIFRecordInfo_FundName>Second Fund</AIFRecordInfo_FundName>"));
}

#[test]
fn fund_markers_preserve_input_order() {
    let reports: Vec<_> = (1..=3)
        .map(|i| {
            let mut report = minimal_report();
            report.identification.fund_name = format!("Fund {i}");
            report.identification.national_code = format!("DE-F0{i}");
            report
        })
        .collect();

    let xml = serialize_aggregate(&reports);

    assert_eq!(xml.matches("<AIFRecordInfo_FundName>").count(), 3);
    assert_eq!(xml.matches("<!-- Fund:").count(), 3);
    let first = xml.find("Fund 1").unwrap();
    let second = xml.find("Fund 2").unwrap();
    let third = xml.find("Fund 3").unwrap();
    assert!(first < second && second < third);
    assert!(xml.contains("<AIFRecordInfo_FundCode>DE-F02</AIFRecordInfo_FundCode>"));
}

#[test]
fn fund_comment_is_escaped() {
    let mut report = minimal_report();
    report.identification.fund_name = "A & B Fund".into();
    let xml = serialize_aggregate(&[report]);

    assert!(xml.contains("<!-- Fund: A &amp; B Fund -->"));
    assert!(xml.contains("<AIFRecordInfo_FundName>A &amp; B Fund</AIFRecordInfo_FundName>"));
}

#[test]
fn aggregate_contains_no_full_fund_records() {
    let xml = serialize_aggregate(&[sample_report()]);

    // Per-fund records are lightweight markers, not the nested fund tree.
    assert!(!xml.contains("<AIFRecordInfo>"));
    assert!(!xml.contains("<AIFCompleteDescription>"));
    assert!(!xml.contains("<NetAssetValue>"));
}
