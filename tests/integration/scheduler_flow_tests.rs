//! Scheduler → event queue → controller flow, without the executor.

use super::mock_hw::{MockTransport, RecordingSink};
use soilwatch::adapters::remote::{Endpoints, RemoteStation};
use soilwatch::adapters::simulator::SimulatedSoil;
use soilwatch::app::commands::AppCommand;
use soilwatch::app::events::AppEvent;
use soilwatch::app::ports::Trigger;
use soilwatch::config::SystemConfig;
use soilwatch::events::{Event, EventQueue};
use soilwatch::garden::{LinkStatus, PumpState};
use soilwatch::runtime::Controller;
use soilwatch::scheduler::Scheduler;

#[test]
fn default_cadence_fires_in_order() {
    let config = SystemConfig::default();
    let mut sched = Scheduler::from_config(&config);
    let mut queue = EventQueue::new();

    for _ in 0..3 {
        sched.tick(&mut queue);
    }

    let mut fired = Vec::new();
    queue.drain(|e| fired.push(e));
    assert_eq!(
        fired,
        vec![
            Event::ClockRefresh,
            Event::AutoModeCheck,
            Event::ClockRefresh,
            Event::AutoModeCheck,
            Event::ClockRefresh,
            Event::MoistureStep,
            Event::AutoModeCheck,
        ]
    );
    assert_eq!(Event::from(Trigger::Telemetry), Event::TelemetryTick);
}

#[test]
fn simulated_controller_runs_a_watering_cycle() {
    let config = SystemConfig {
        initial_moisture: 41,
        ..Default::default()
    };
    let hw = SimulatedSoil::new(config.drift);
    let mut c = Controller::new(&config, hw, RecordingSink::default());
    c.start();
    c.submit(AppCommand::SetAutoMode(true));

    // 41 -> 40 at tick 3, 39 at tick 6 (pump on), then +2 per step.
    for _ in 0..6 {
        c.tick();
    }
    assert_eq!(c.app().pump_state(), PumpState::On);
    assert_eq!(c.app().moisture_level().get(), 39);

    for _ in 0..48 {
        c.tick();
    }
    // 16 more steps: 39 + 32 = 71, auto check turns the pump off.
    assert_eq!(c.app().moisture_level().get(), 71);
    assert_eq!(c.app().pump_state(), PumpState::Off);
    assert!(matches!(c.sink().events.first(), Some(AppEvent::Started(_))));
    assert_eq!(c.app().link(), LinkStatus::Local);
}

#[test]
fn remote_controller_keeps_state_while_station_is_down() {
    let config = SystemConfig::default();
    let station = RemoteStation::new(
        MockTransport::new(),
        Endpoints::new("http://192.168.1.100", None),
    );
    let mut c = Controller::new(&config, station, RecordingSink::default());
    let before = c.app().state();

    for _ in 0..9 {
        c.tick();
    }

    assert_eq!(c.app().state(), before);
    assert_eq!(c.app().link(), LinkStatus::Disconnected);
    // Three polls, primary only.
    assert_eq!(c.hw().transport().requests.len(), 3);
}

#[test]
fn remote_start_with_dead_station_reports_stale_data() {
    let config = SystemConfig::default();
    let station = RemoteStation::new(
        MockTransport::new(),
        Endpoints::new("http://192.168.1.100", None),
    );
    let mut c = Controller::new(&config, station, RecordingSink::default());

    c.start();
    c.tick();
    c.tick();

    let t = c.app().build_telemetry();
    assert_eq!(t.link, LinkStatus::Disconnected);
    assert_eq!(t.steps, 0);
    // Polled once at startup, before the first moisture step is due.
    assert_eq!(c.hw().transport().requests.len(), 1);
    assert!(!c
        .sink()
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::LinkChanged(_))));
}

#[test]
fn remote_start_applies_station_data_before_first_tick() {
    let config = SystemConfig::default();
    let t = MockTransport::new()
        .on_get("http://192.168.1.100/data", Ok(r#"{"moisture":44,"pump":1}"#));
    let station = RemoteStation::new(t, Endpoints::new("http://192.168.1.100", None));
    let mut c = Controller::new(&config, station, RecordingSink::default());

    c.start();

    assert_eq!(c.app().moisture_level().get(), 44);
    assert_eq!(c.app().pump_state(), PumpState::On);
    assert_eq!(c.app().link(), LinkStatus::Connected);
    assert!(c.sink().events.contains(&AppEvent::LinkChanged(LinkStatus::Connected)));
}
