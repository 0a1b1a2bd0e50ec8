//! Output shape tests for the JSON rendering path

use veritrust::core::models::{ScanResult, StaffStatus, VerificationLog};
use veritrust::output::{CardView, LogRow, OperationResult, ScanReport, StaffRow};

use crate::common::fixtures::StaffBuilder;

#[test]
fn operation_result_serializes_success_and_message() {
    let result = OperationResult {
        success: true,
        message: "done".to_string(),
    };
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["message"], "done");
}

#[test]
fn staff_row_renders_status_as_wire_text() {
    let member = StaffBuilder::new().status(StaffStatus::Suspended).build();
    let row = StaffRow::from(&member);
    assert_eq!(row.status, "SUSPENDED");
    assert_eq!(row.id, "NGO-5000");
}

#[test]
fn log_row_carries_the_scan_snapshot() {
    let entry = VerificationLog::new(
        "NGO-5000".to_string(),
        StaffStatus::Expired,
        "DEVICE-1234".to_string(),
    );
    let row = LogRow::from(&entry);
    assert_eq!(row.status_at_scan, "EXPIRED");
    assert_eq!(row.result, "FAIL");
    assert_eq!(row.verifier_id, "DEVICE-1234");
}

#[test]
fn scan_report_json_distinguishes_verdicts() {
    let member = StaffBuilder::new().build();
    let pass = serde_json::to_value(ScanReport::matched("NGO-5000", &member, ScanResult::Pass))
        .unwrap();
    assert_eq!(pass["verdict"], "PASS");
    assert_eq!(pass["staff"]["id"], "NGO-5000");

    let invalid = serde_json::to_value(ScanReport::invalid("NOPE")).unwrap();
    assert_eq!(invalid["verdict"], "INVALID");
    assert!(invalid["staff"].is_null());
}

#[test]
fn card_view_flattens_the_staff_row() {
    let member = StaffBuilder::new().build();
    let value = serde_json::to_value(CardView::new(&member)).unwrap();
    // The staff row is flattened; its fields sit at the top level
    assert_eq!(value["id"], "NGO-5000");
    assert_eq!(value["qr_payload"], "NGO-5000");
    assert_eq!(value["doc_seal_payload"], "DOC:NGO-5000");
    assert_eq!(value["email"], "test.person@ngo.org");
}
