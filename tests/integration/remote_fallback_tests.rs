//! Remote station: primary-then-fallback policy and stale-data handling.

use super::mock_hw::{MockTransport, RecordingSink, Request};
use soilwatch::adapters::remote::{Endpoints, RemoteStation};
use soilwatch::app::commands::AppCommand;
use soilwatch::app::events::{AppEvent, PumpCause};
use soilwatch::app::ports::TransportError;
use soilwatch::app::service::AppService;
use soilwatch::config::SystemConfig;
use soilwatch::garden::{LinkStatus, PumpState};

const PRIMARY: &str = "http://192.168.1.100";
const FALLBACK: &str = "https://garden.example-tunnel.app";

fn station(transport: MockTransport) -> RemoteStation<MockTransport> {
    RemoteStation::new(transport, Endpoints::new(PRIMARY, Some(FALLBACK.into())))
}

fn link_events(sink: &RecordingSink) -> Vec<LinkStatus> {
    sink.events
        .iter()
        .filter_map(|e| match e {
            AppEvent::LinkChanged(l) => Some(*l),
            _ => None,
        })
        .collect()
}

#[test]
fn primary_success_skips_fallback() {
    let t = MockTransport::new()
        .on_get("http://192.168.1.100/data", Ok(r#"{"moisture":55,"pump":0}"#));
    let mut hw = station(t);
    let mut app = AppService::new(&SystemConfig::default());
    let mut sink = RecordingSink::default();

    app.step_environment(&mut hw, &mut sink);

    assert_eq!(app.moisture_level().get(), 55);
    assert_eq!(hw.transport().urls(), vec!["http://192.168.1.100/data"]);
    assert_eq!(app.link(), LinkStatus::Connected);
}

#[test]
fn primary_failure_falls_back_once() {
    let t = MockTransport::new()
        .on_get("http://192.168.1.100/data", Err(TransportError::Timeout))
        .on_get(
            "https://garden.example-tunnel.app/data",
            Ok(r#"{"moisture":33,"pump":1}"#),
        );
    let mut hw = station(t);
    let mut app = AppService::new(&SystemConfig::default());
    let mut sink = RecordingSink::default();

    app.step_environment(&mut hw, &mut sink);

    assert_eq!(app.moisture_level().get(), 33);
    assert_eq!(app.pump_state(), PumpState::On);
    assert!(sink.events.contains(&AppEvent::PumpChanged {
        to: PumpState::On,
        cause: PumpCause::Remote,
    }));
    assert_eq!(hw.transport().requests.len(), 2);
}

#[test]
fn malformed_primary_body_falls_back() {
    let t = MockTransport::new()
        .on_get("http://192.168.1.100/data", Ok(r#"{"moisture":50,"pump":7}"#))
        .on_get(
            "https://garden.example-tunnel.app/data",
            Ok(r#"{"moisture":180,"pump":0}"#),
        );
    let mut hw = station(t);
    let mut app = AppService::new(&SystemConfig::default());
    let mut sink = RecordingSink::default();

    app.step_environment(&mut hw, &mut sink);

    assert_eq!(app.moisture_level().get(), 100);
}

#[test]
fn both_failing_keeps_state_and_reports_link_once() {
    let t = MockTransport::new()
        .on_get("http://192.168.1.100/data", Err(TransportError::Status(500)));
    let mut hw = station(t);
    let mut app = AppService::new(&SystemConfig::default());
    let mut sink = RecordingSink::default();
    let before = app.state();

    for _ in 0..3 {
        app.step_environment(&mut hw, &mut sink);
    }

    assert_eq!(app.state(), before);
    assert_eq!(app.link(), LinkStatus::Disconnected);
    assert_eq!(link_events(&sink), vec![LinkStatus::Disconnected]);
    assert_eq!(app.step_count(), 0);
    // Two attempts per poll, no retries beyond the fallback.
    assert_eq!(hw.transport().requests.len(), 6);
}

#[test]
fn recovery_after_outage_reconnects() {
    let t = MockTransport::new()
        .on_get("http://192.168.1.100/data", Err(TransportError::Unreachable))
        .on_get("http://192.168.1.100/data", Ok(r#"{"moisture":61,"pump":0}"#));
    let mut hw = station(t);
    let mut app = AppService::new(&SystemConfig::default());
    let mut sink = RecordingSink::default();

    app.step_environment(&mut hw, &mut sink);
    app.step_environment(&mut hw, &mut sink);

    assert_eq!(app.moisture_level().get(), 61);
    assert_eq!(
        link_events(&sink),
        vec![LinkStatus::Disconnected, LinkStatus::Connected]
    );
}

#[test]
fn pump_command_posts_with_fallback() {
    let t = MockTransport::new()
        .on_post("http://192.168.1.100/api/pump/start", Err(TransportError::Unreachable))
        .on_post("https://garden.example-tunnel.app/api/pump/start", Ok(()));
    let mut hw = station(t);
    let mut app = AppService::new(&SystemConfig::default());
    let mut sink = RecordingSink::default();

    app.handle_command(AppCommand::StartPump, &mut hw, &mut sink);

    assert_eq!(app.pump_state(), PumpState::On);
    assert_eq!(
        hw.transport().urls(),
        vec![
            "http://192.168.1.100/api/pump/start",
            "https://garden.example-tunnel.app/api/pump/start",
        ]
    );
}

#[test]
fn undelivered_command_still_updates_local_state() {
    let mut hw = station(MockTransport::new());
    let mut app = AppService::new(&SystemConfig::default());
    let mut sink = RecordingSink::default();

    app.handle_command(AppCommand::StartPump, &mut hw, &mut sink);
    app.handle_command(AppCommand::StopPump, &mut hw, &mut sink);

    assert_eq!(app.pump_state(), PumpState::Off);
    assert_eq!(hw.transport().requests.len(), 4);
}

#[test]
fn auto_mode_toggle_posts_json_body() {
    let t = MockTransport::new().on_post("http://192.168.1.100/api/auto-mode", Ok(()));
    let mut hw = station(t);
    let mut app = AppService::new(&SystemConfig::default());
    let mut sink = RecordingSink::default();

    app.handle_command(AppCommand::SetAutoMode(true), &mut hw, &mut sink);

    assert_eq!(
        hw.transport().requests,
        vec![Request::Post {
            url: "http://192.168.1.100/api/auto-mode".into(),
            body: Some(r#"{"enabled":true}"#.into()),
        }]
    );
}

#[test]
fn auto_rule_on_remote_data_posts_pump_start() {
    let t = MockTransport::new()
        .on_get("http://192.168.1.100/data", Ok(r#"{"moisture":30,"pump":0}"#))
        .on_post("http://192.168.1.100/api/auto-mode", Ok(()))
        .on_post("http://192.168.1.100/api/pump/start", Ok(()));
    let mut hw = station(t);
    let mut app = AppService::new(&SystemConfig::default());
    let mut sink = RecordingSink::default();

    app.handle_command(AppCommand::SetAutoMode(true), &mut hw, &mut sink);
    app.step_environment(&mut hw, &mut sink);
    app.evaluate_auto_mode(&mut hw, &mut sink);

    assert_eq!(app.pump_state(), PumpState::On);
    assert_eq!(
        hw.transport().urls().last(),
        Some(&"http://192.168.1.100/api/pump/start")
    );
}
