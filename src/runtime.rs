//! Control runtime: scheduler, event queue and service wired together.
//!
//! Runs on the main thread using `edge-executor` for cooperative
//! scheduling and `async-io-mini` for reactor-driven timers.  Two
//! concurrent futures share one [`Controller`]:
//!
//! 1. **Control**: sleeps one base tick, ticks the scheduler, drains the
//!    event queue
//! 2. **Commands**: wakes on `COMMAND_CHANNEL.receive()` and applies the
//!    command immediately
//!
//! ```text
//!  ┌────────────────────────────────────────────────────────┐
//!  │  futures_lite::future::block_on                        │
//!  │  ┌──────────────────────────────────────────────────┐  │
//!  │  │  edge_executor::LocalExecutor                    │  │
//!  │  │                                                  │  │
//!  │  │  ┌──────────────────┐   ┌─────────────────────┐  │  │
//!  │  │  │ Control (tick ⏱) │   │ Commands (wake-on-  │  │  │
//!  │  │  │                  │   │ send)               │  │  │
//!  │  │  └────────┬─────────┘   └──────────┬──────────┘  │  │
//!  │  │           └──── Rc<RefCell<Controller>> ─┘       │  │
//!  │  └──────────────────────────────────────────────────┘  │
//!  └────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither future holds the controller borrow across an `.await`, so each
//! event runs to completion before the other future can observe state.

use core::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::info;

use crate::adapters::time::HostClock;
use crate::app::commands::AppCommand;
use crate::app::events::AppEvent;
use crate::app::ports::{ActuatorPort, EventSink, SensorPort};
use crate::app::service::AppService;
use crate::channels::COMMAND_CHANNEL;
use crate::config::SystemConfig;
use crate::events::{Event, EventQueue};
use crate::garden::LinkStatus;
use crate::scheduler::Scheduler;

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

/// Owns the service together with its adapters and timing state.
///
/// `H` is the garden backend (simulator or remote station), `S` the event
/// sink.
pub struct Controller<H, S> {
    app: AppService,
    hw: H,
    sink: S,
    scheduler: Scheduler,
    queue: EventQueue,
    clock: HostClock,
}

impl<H, S> Controller<H, S>
where
    H: SensorPort + ActuatorPort,
    S: EventSink,
{
    pub fn new(config: &SystemConfig, hw: H, sink: S) -> Self {
        Self {
            app: AppService::new(config),
            hw,
            sink,
            scheduler: Scheduler::from_config(config),
            queue: EventQueue::new(),
            clock: HostClock::new(),
        }
    }

    /// Announce the initial state.  A remote source is polled right away
    /// instead of waiting for the first moisture step.
    pub fn start(&mut self) {
        self.app.start(&self.hw, &mut self.sink);
        if self.hw.link() != LinkStatus::Local {
            self.app.step_environment(&mut self.hw, &mut self.sink);
        }
    }

    /// One base tick: fire due schedules, then process everything queued.
    pub fn tick(&mut self) {
        self.scheduler.tick(&mut self.queue);
        self.drain();
    }

    /// Queue an external command and process it right away.
    pub fn submit(&mut self, cmd: AppCommand) {
        self.queue.push(Event::Command(cmd));
        self.drain();
    }

    fn drain(&mut self) {
        while let Some(event) = self.queue.pop() {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: Event) {
        match event {
            Event::ClockRefresh => {
                self.sink.emit(&AppEvent::Clock(self.clock.clock_label()));
            }
            Event::MoistureStep => {
                self.app.step_environment(&mut self.hw, &mut self.sink);
            }
            Event::AutoModeCheck => {
                self.app.evaluate_auto_mode(&mut self.hw, &mut self.sink);
            }
            Event::TelemetryTick => {
                let t = self.app.build_telemetry();
                self.sink.emit(&AppEvent::Telemetry(t));
            }
            Event::Command(cmd) => {
                self.app.handle_command(cmd, &mut self.hw, &mut self.sink);
            }
        }
    }

    pub fn app(&self) -> &AppService {
        &self.app
    }

    pub fn hw(&self) -> &H {
        &self.hw
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Events lost to queue overflow since startup.
    pub fn dropped_events(&self) -> u32 {
        self.queue.dropped()
    }
}

// ───────────────────────────────────────────────────────────────
// Async loops
// ───────────────────────────────────────────────────────────────

type Shared<H, S> = Rc<RefCell<Controller<H, S>>>;

async fn control_loop<H, S>(controller: Shared<H, S>, tick: Duration)
where
    H: SensorPort + ActuatorPort,
    S: EventSink,
{
    loop {
        async_io_mini::Timer::after(tick).await;
        controller.borrow_mut().tick();
    }
}

async fn command_loop<H, S>(controller: Shared<H, S>)
where
    H: SensorPort + ActuatorPort,
    S: EventSink,
{
    loop {
        let cmd = COMMAND_CHANNEL.receive().await;
        controller.borrow_mut().submit(cmd);
    }
}

/// Start the service and drive it forever on the calling thread.
pub fn run<H, S>(mut controller: Controller<H, S>, tick: Duration)
where
    H: SensorPort + ActuatorPort,
    S: EventSink,
{
    let executor: edge_executor::LocalExecutor<'_, 4> = edge_executor::LocalExecutor::new();

    controller.start();
    let controller: Shared<H, S> = Rc::new(RefCell::new(controller));

    executor
        .spawn(control_loop(controller.clone(), tick))
        .detach();
    executor.spawn(command_loop(controller)).detach();

    info!("Runtime started (tick {} ms)", tick.as_millis());

    futures_lite::future::block_on(executor.run(core::future::pending::<()>()));
}
