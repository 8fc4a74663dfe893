// Wire-format tests: tagged envelope, camelCase fields, enum labels

use pumpmon::models::*;

fn sample_status() -> DeviceStatusPayload {
    DeviceStatusPayload {
        device_id: "dev-1".into(),
        device_type: "潜水贯流泵".into(),
        station: "station-1".into(),
        current: 45.0,
        voltage: 380.0,
        flow: 1200.0,
        status: DeviceState::Running,
    }
}

#[test]
fn test_device_status_envelope_tag_and_camel_case() {
    let event = WsEvent::DeviceStatus(sample_status());
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"deviceStatus\""));
    assert!(json.contains("\"payload\""));
    assert!(json.contains("\"deviceId\""));
    assert!(json.contains("\"deviceType\""));
    assert!(json.contains("\"status\":\"running\""));
    let back: WsEvent = serde_json::from_str(&json).unwrap();
    match back {
        WsEvent::DeviceStatus(p) => assert_eq!(p.device_id, "dev-1"),
        other => panic!("wrong variant: {:?}", other),
    }
}

#[test]
fn test_machine_trend_envelope() {
    let event = WsEvent::MachineTrend(MachineTrendPayload {
        device_key: "motor-rear".into(),
        metric: Metric::Temperature,
        value: 42.0,
    });
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"machineTrend\""));
    assert!(json.contains("\"deviceKey\":\"motor-rear\""));
    assert!(json.contains("\"metric\":\"temperature\""));
}

#[test]
fn test_alert_envelope_is_batch() {
    let event = WsEvent::Alert(vec![AlertEvent {
        key: String::new(),
        device_name: "通风机1".into(),
        component: "电机前端".into(),
        signal_type: SignalType::Current,
        unit: "A".into(),
        value: 72.0,
        alert_level: Severity::Warning,
        time: "2026-03-01T00:00:00.000Z".into(),
    }]);
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"alert\""));
    assert!(json.contains("\"payload\":["));
    assert!(json.contains("\"signalType\":\"电流\""));
    assert!(json.contains("\"alertLevel\":\"warning\""));
    // UI key is client-side only; never serialized when empty.
    assert!(!json.contains("\"key\""));
}

#[test]
fn test_alert_event_without_key_deserializes() {
    let json = r#"{
        "deviceName": "潜水泵2",
        "component": "轴承箱后端",
        "signalType": "温度",
        "unit": "°C",
        "value": 95,
        "alertLevel": "warning",
        "time": "2026-03-01T00:00:00.000Z"
    }"#;
    let event: AlertEvent = serde_json::from_str(json).unwrap();
    assert!(event.key.is_empty());
    assert_eq!(event.signal_type, SignalType::Temperature);
    assert_eq!(event.alert_level, Severity::Warning);
}

#[test]
fn test_unknown_envelope_tag_rejected() {
    let json = r#"{"type":"heartbeat","payload":{}}"#;
    assert!(serde_json::from_str::<WsEvent>(json).is_err());
}

#[test]
fn test_signal_type_labels_roundtrip() {
    for (signal, label) in [
        (SignalType::Current, "电流"),
        (SignalType::Voltage, "电压"),
        (SignalType::Temperature, "温度"),
        (SignalType::Flow, "水流量"),
    ] {
        assert_eq!(signal.label(), label);
        let json = serde_json::to_string(&signal).unwrap();
        assert_eq!(json, format!("\"{}\"", label));
        let back: SignalType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, signal);
    }
}

#[test]
fn test_station_snapshot_serialization() {
    let station = Station {
        id: "station-1".into(),
        name: "泵站一".into(),
        devices: vec![Device {
            id: "dev-1".into(),
            device_type: "潜水贯流泵".into(),
            status: DeviceState::Stopped,
            current: 0.0,
            voltage: 0.0,
            flow: 0.0,
        }],
    };
    let json = serde_json::to_string(&station).unwrap();
    assert!(json.contains("\"deviceType\""));
    assert!(json.contains("\"status\":\"stopped\""));
    let back: Station = serde_json::from_str(&json).unwrap();
    assert_eq!(back.device("dev-1").unwrap().id, "dev-1");
}
