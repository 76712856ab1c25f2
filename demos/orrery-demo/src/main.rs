/// Headless orrery demo — runs the full loop (catalog → engine → framing →
/// camera rig) for a few simulated seconds with scripted selection changes,
/// logging every camera command the framing controller issues.
///
/// Run with `RUST_LOG=debug` to see the per-transition framing decisions.

use glam::DVec3;
use orrery_engine::{
    solar_catalog, FixedTimestep, InputEvent, Orrery, OrreryConfig, SmoothRig,
};

/// Simulated wall-clock seconds to run.
const RUN_SECONDS: f64 = 8.0;
/// Pretend frame pacing: slightly uneven to exercise the accumulator.
const FRAME_DT: f64 = 1.0 / 58.0;

/// UI script: (time in seconds, event).
fn script() -> Vec<(f64, InputEvent)> {
    vec![
        (0.5, InputEvent::SetSimSpeed(600_000.0)),
        (1.0, InputEvent::Select(Some("Earth".to_owned()))),
        (3.0, InputEvent::Select(Some("Sun".to_owned()))),
        (4.5, InputEvent::Select(Some("Jupiter".to_owned()))),
        (6.5, InputEvent::Select(None)),
        (7.0, InputEvent::SetSunPosition(DVec3::new(2.0, 0.0, -1.0))),
    ]
}

fn main() {
    env_logger::init();

    let config = OrreryConfig::default();
    let fixed_dt = config.fixed_dt;
    let mut orrery = Orrery::new(solar_catalog(), config);
    let mut rig = SmoothRig::new();
    let mut clock = FixedTimestep::new(fixed_dt);

    let mut script = script();
    script.reverse(); // pop from the front by time

    let mut elapsed = 0.0;
    let mut requests = 0usize;
    while elapsed < RUN_SECONDS {
        elapsed += FRAME_DT;

        while script.last().is_some_and(|(at, _)| *at <= elapsed) {
            let (at, event) = script.pop().unwrap();
            log::info!("t={at:.1}s: {event:?}");
            orrery.input_mut().push(event);
        }

        for _ in 0..clock.accumulate(FRAME_DT) {
            if let Some(request) = orrery.tick(clock.dt(), Some(&mut rig)) {
                requests += 1;
                log::debug!(
                    "frame request: target {:?}, distance {:?}, min {}",
                    request.target,
                    request.distance,
                    request.min_distance
                );
            }
        }
        rig.advance(FRAME_DT);
    }

    println!("simulated {elapsed:.1}s, {requests} camera commands issued");
    println!(
        "camera: target {:?}, position {:?}, distance {:.2}",
        rig.target(),
        rig.position(),
        rig.distance()
    );
    let view = orrery.positions();
    let mut bodies: Vec<_> = view.iter().collect();
    bodies.sort_by(|a, b| a.0.cmp(b.0));
    for (name, position) in bodies {
        println!("{name:>8}: ({:8.3}, {:6.3}, {:8.3})", position.x, position.y, position.z);
    }
}
