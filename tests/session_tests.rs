// Session tests: frame dispatch, malformed input, reconnect backoff

use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use pumpmon::catalog::Catalog;
use pumpmon::client::{ClientState, reconnect_delay};
use pumpmon::models::{DeviceState, Metric};
use tokio::time::Duration;

fn client() -> ClientState {
    ClientState::new(Catalog::seed().stations().to_vec(), 50, 100)
}

#[test]
fn test_device_status_frame_updates_registry() {
    let mut state = client();
    state.handle_frame(
        r#"{"type":"deviceStatus","payload":{
            "deviceId":"dev-1","deviceType":"潜水贯流泵","station":"station-1",
            "current":66.0,"voltage":377.0,"flow":1900.0,"status":"stopped"}}"#,
    );
    let dev = state.registry.device("dev-1").unwrap();
    assert_eq!(dev.current, 66.0);
    assert_eq!(dev.status, DeviceState::Stopped);
}

#[test]
fn test_machine_trend_frame_appends_window_point() {
    let mut state = client();
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
    state.handle_frame_at(
        r#"{"type":"machineTrend","payload":{"deviceKey":"motor-rear","metric":"voltage","value":63.0}}"#,
        now,
    );
    state.handle_frame_at(
        r#"{"type":"machineTrend","payload":{"deviceKey":"motor-rear","metric":"voltage","value":64.0}}"#,
        now + ChronoDuration::seconds(5),
    );
    let points = state.trends.query("motor-rear", Metric::Voltage, None);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].value, 63.0);
    assert_eq!(points[1].value, 64.0);
}

#[test]
fn test_alert_frame_feeds_history() {
    let mut state = client();
    state.handle_frame(
        r#"{"type":"alert","payload":[{
            "deviceName":"潜水泵2","component":"轴承箱后端","signalType":"温度",
            "unit":"°C","value":108,"alertLevel":"danger","time":"2026-03-01T08:00:00.000Z"}]}"#,
    );
    assert_eq!(state.alerts.history().count(), 1);
    assert_eq!(state.alerts.active().len(), 1);
}

#[test]
fn test_malformed_json_discarded_without_effect() {
    let mut state = client();
    let current_before = state.registry.device("dev-1").unwrap().current;
    state.handle_frame("{not json");
    state.handle_frame("");
    assert_eq!(state.registry.device("dev-1").unwrap().current, current_before);
    assert_eq!(state.alerts.history().count(), 0);
}

#[test]
fn test_unknown_type_tag_discarded() {
    let mut state = client();
    state.handle_frame(r#"{"type":"heartbeat","payload":{"seq":1}}"#);
    assert_eq!(state.alerts.history().count(), 0);
}

#[test]
fn test_unknown_device_in_frame_is_not_fatal() {
    let mut state = client();
    state.handle_frame(
        r#"{"type":"deviceStatus","payload":{
            "deviceId":"dev-99","deviceType":"通风机","station":"station-1",
            "current":1.0,"voltage":2.0,"flow":3.0,"status":"running"}}"#,
    );
    assert!(state.registry.device("dev-99").is_none());
}

#[test]
fn test_reconnect_delay_doubles_to_cap() {
    assert_eq!(reconnect_delay(0), Duration::from_secs(1));
    assert_eq!(reconnect_delay(1), Duration::from_secs(2));
    assert_eq!(reconnect_delay(2), Duration::from_secs(4));
    assert_eq!(reconnect_delay(5), Duration::from_secs(32));
    assert_eq!(reconnect_delay(6), Duration::from_secs(60));
    assert_eq!(reconnect_delay(50), Duration::from_secs(60));
}

#[test]
fn test_reconnect_delay_monotonic_non_decreasing() {
    for attempt in 0..20 {
        assert!(reconnect_delay(attempt) <= reconnect_delay(attempt + 1));
    }
}
