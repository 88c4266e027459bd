//! Randomly generated, properly nested runs.

use rand::{rngs::StdRng, Rng, SeedableRng as _};
use suite_logbook::{
    event::TestEvent, logger::Memory, Event, EventSink as _, Listener, Outcome,
    State, Status,
};

/// Generates a properly nested run of at most `max_depth` suites deep.
fn run(rng: &mut impl Rng, max_depth: usize) -> Vec<Event> {
    fn suite(
        rng: &mut impl Rng,
        path: String,
        depth: usize,
        out: &mut Vec<Event>,
    ) {
        out.push(Event::suite_started(path.clone(), 0));
        for i in 0..rng.gen_range(0..4) {
            if depth < 1 || !rng.gen_bool(0.4) {
                let status = Status::from_code(rng.gen_range(-1..7));
                out.push(Event::test_started(format!("{path}::t{i}")));
                out.push(Event::test_finished(
                    format!("{path}::t{i}"),
                    Outcome::new(status).with_assertions(rng.gen_range(0..3)),
                ));
            } else {
                suite(rng, format!("{path}/s{i}"), depth - 1, out);
            }
        }
        out.push(Event::suite_finished(path));
    }

    let mut out = Vec::new();
    suite(rng, "Root".into(), max_depth, &mut out);
    out
}

#[test]
fn ended_never_exceeds_started() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let events = run(&mut rng, 4);
        let last = events.len() - 1;
        let mut listener = Listener::new(Memory::new());

        for (i, event) in events.into_iter().enumerate() {
            listener.handle(event).unwrap();

            let suites = listener.suites();
            assert!(suites.ended() <= suites.started());
            if i == last {
                assert!(suites.is_complete());
                assert_eq!(suites.ended(), suites.started());
                assert_eq!(listener.state(), State::Idle);
            } else {
                assert!(!suites.is_complete());
                assert_eq!(listener.state(), State::InRun);
            }
        }
    }
}

#[test]
fn top_level_total_matches_finished_tests() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let events = run(&mut rng, 3);
        let finished = events
            .iter()
            .filter(|ev| matches!(ev, Event::Test(_, TestEvent::Finished(_))))
            .count();

        let mut listener = Listener::new(Memory::new());
        listener.handle_all(events).unwrap();

        let summary = listener.summary().unwrap();
        assert_eq!(summary.tests, finished);
        assert_eq!(listener.stats().record_of("Root").total(), finished);

        let ends = listener.logger().with_operation("endTest").count();
        assert_eq!(ends, finished);
    }
}
