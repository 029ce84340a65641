use std::sync::Arc;

use error_fanin::traits::ResultExt;
use error_fanin::{Collector, Context};

#[test]
fn report_to_registers_failures_and_keeps_values() {
    let collector = Collector::new();
    let values: Vec<u16> = ["80", "http", "443", "-1"]
        .iter()
        .filter_map(|s| s.parse::<u16>().report_to(&collector))
        .collect();

    assert_eq!(values, [80, 443]);
    assert_eq!(collector.finalize().unwrap().len(), 2);
}

#[test]
fn report_in_uses_the_context_collector() {
    let collector = Arc::new(Collector::new());
    let ctx = collector.new_context(&Context::background());

    assert_eq!(Ok::<_, String>("kept").report_in(&ctx), Some("kept"));
    assert_eq!(Err::<(), _>("dropped into collector").report_in(&ctx), None);

    assert_eq!(
        collector.finalize().unwrap().messages(),
        ["dropped into collector"]
    );
}

#[test]
fn report_in_without_collector_still_returns_none() {
    let ctx = Context::background();
    assert_eq!(Err::<(), _>("nowhere to go").report_in(&ctx), None);
}

#[test]
fn report_to_accepts_boxed_errors() {
    let collector = Collector::new();
    let boxed: Result<(), Box<dyn std::error::Error + Send + Sync>> =
        Err(std::io::Error::other("disk gone").into());

    assert_eq!(boxed.report_to(&collector), None);
    assert_eq!(collector.finalize().unwrap().messages(), ["disk gone"]);
}
