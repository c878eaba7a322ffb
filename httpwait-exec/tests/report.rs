use std::time::Duration;

use httpwait_core::{MemoryReporter, PollResult, PollStatus, ResponseBody};
use httpwait_exec::report_result;

fn result(status: PollStatus) -> PollResult {
    PollResult {
        result: status,
        http_status: Some(200),
        response: Some(ResponseBody::Json(serde_json::json!({"actor": "john"}))),
        duration: Duration::from_millis(1234),
        attempts: 1,
    }
}

#[test]
fn records_outputs_in_order() {
    let reporter = MemoryReporter::new();
    report_result(&result(PollStatus::Ok), true, &reporter).unwrap();
    assert_eq!(
        reporter.outputs(),
        vec![
            ("response".to_string(), r#"{"actor":"john"}"#.to_string()),
            ("duration".to_string(), "1234".to_string()),
            ("result".to_string(), "OK".to_string()),
            ("http-status".to_string(), "200".to_string()),
        ]
    );
}

#[test]
fn text_response_is_recorded_verbatim() {
    let reporter = MemoryReporter::new();
    let mut r = result(PollStatus::Ok);
    r.response = Some(ResponseBody::Text("actor john".to_string()));
    report_result(&r, false, &reporter).unwrap();
    assert_eq!(reporter.output("response").as_deref(), Some("actor john"));
}

#[test]
fn missing_values_are_recorded_empty() {
    let reporter = MemoryReporter::new();
    let mut r = result(PollStatus::Timeout);
    r.response = None;
    r.http_status = None;
    report_result(&r, false, &reporter).unwrap();
    assert_eq!(reporter.output("response").as_deref(), Some(""));
    assert_eq!(reporter.output("http-status").as_deref(), Some(""));
    assert_eq!(reporter.output("result").as_deref(), Some("timeout"));
}

#[test]
fn stop_on_error_fails_non_ok_results() {
    for status in [PollStatus::Timeout, PollStatus::MaxLoop] {
        let reporter = MemoryReporter::new();
        let err = report_result(&result(status), true, &reporter).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Action failed because of stop-on-error is set and result is not OK: {status}")
        );
        // Outputs are still written before the failure.
        assert_eq!(reporter.outputs().len(), 4);
    }
}

#[test]
fn without_stop_on_error_any_result_succeeds() {
    for status in [PollStatus::Ok, PollStatus::Timeout, PollStatus::MaxLoop] {
        assert!(report_result(&result(status), false, &MemoryReporter::new()).is_ok());
    }
}
