use libc::{self, c_int};

use crate::mock::{Event, MockSink};
use crate::{Context, Facility, Level, Logger, SinkOpenError, DEFAULT_FACILITY, DEFAULT_OPTIONS};

fn context(pairs: &[(&'static str, &str)]) -> Context<'static> {
    pairs.iter().map(|&(k, v)| (k, v.to_string())).collect()
}

#[test]
fn test_log_with_placeholder_values() {
    let sink = MockSink::new();
    let logger = Logger::new(&sink, Some("test-app"), Level::Debug);

    let ctx = context(&[("foo", "FOO"), ("f", "F")]);
    logger
        .log(Level::Info, "Foo: {foo}, F: {f}, Missing: {missing}", &ctx)
        .unwrap();

    assert_eq!(
        sink.writes(),
        vec![(libc::LOG_INFO, "Foo: FOO, F: F, Missing: {missing}".to_string())]
    );
}

#[test]
fn test_log_ignores_low_level() {
    let sink = MockSink::new();
    let logger = Logger::new(&sink, Some("test-app"), Level::Info);

    logger.debug("This should not be logged.", &Context::new()).unwrap();

    // Not even an `open`: a filtered message has no side effects at all.
    assert_eq!(sink.events(), vec![]);
}

#[test]
fn test_log_opens_only_once() {
    let sink = MockSink::new();
    let logger = Logger::new(&sink, Some("test-app"), Level::Debug);

    logger.info("one", &Context::new()).unwrap();
    logger.info("two", &Context::new()).unwrap();

    assert_eq!(sink.open_count(), 1);
    assert_eq!(
        sink.writes(),
        vec![
            (libc::LOG_INFO, "one".to_string()),
            (libc::LOG_INFO, "two".to_string()),
        ]
    );
}

#[test]
fn test_open_receives_configuration() {
    let sink = MockSink::new();
    let mut logger = Logger::new(&sink, Some("test-app"), Level::Debug);
    logger.set_facility(Facility::Local0);
    logger.set_options(libc::LOG_PID);

    logger.notice("hello", &Context::new()).unwrap();

    assert_eq!(
        sink.events(),
        vec![
            Event::Open {
                ident: Some("test-app".to_string()),
                options: libc::LOG_PID,
                facility: libc::LOG_LOCAL0,
            },
            Event::Write {
                priority: libc::LOG_NOTICE,
                message: "hello".to_string(),
            },
        ]
    );
}

#[test]
fn test_failed_open_suppresses_and_retries() {
    let sink = MockSink::new();
    let logger = Logger::new(&sink, Some("test-app"), Level::Debug);

    sink.fail_open(true);
    assert_eq!(logger.info("lost", &Context::new()), Err(SinkOpenError));
    assert_eq!(sink.writes(), vec![]);

    // The logger stayed unopened, so the next accepted message retries.
    sink.fail_open(false);
    logger.info("delivered", &Context::new()).unwrap();

    assert_eq!(sink.open_count(), 2);
    assert_eq!(sink.writes(), vec![(libc::LOG_INFO, "delivered".to_string())]);

    // Success is terminal: no further opens.
    logger.info("again", &Context::new()).unwrap();
    assert_eq!(sink.open_count(), 2);
}

#[test]
fn test_each_level_maps_to_its_priority() {
    let sink = MockSink::new();
    let logger = Logger::new(&sink, None::<String>, Level::Debug);
    let ctx = Context::new();

    logger.emergency("m", &ctx).unwrap();
    logger.alert("m", &ctx).unwrap();
    logger.critical("m", &ctx).unwrap();
    logger.error("m", &ctx).unwrap();
    logger.warning("m", &ctx).unwrap();
    logger.notice("m", &ctx).unwrap();
    logger.info("m", &ctx).unwrap();
    logger.debug("m", &ctx).unwrap();

    let priorities: Vec<c_int> = sink.writes().into_iter().map(|(p, _)| p).collect();
    assert_eq!(priorities, vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_setters_round_trip_without_sink_interaction() {
    let sink = MockSink::new();
    let mut logger = Logger::with_defaults(&sink);

    assert_eq!(logger.ident(), None);
    assert_eq!(logger.options(), DEFAULT_OPTIONS);
    assert_eq!(logger.facility(), DEFAULT_FACILITY);
    assert_eq!(logger.min_level(), Some(Level::Debug));

    logger.set_ident(Some("renamed"));
    logger.set_options(libc::LOG_NDELAY);
    logger.set_facility(libc::LOG_MAIL);

    assert_eq!(logger.ident(), Some("renamed"));
    assert_eq!(logger.options(), libc::LOG_NDELAY);
    assert_eq!(logger.facility(), libc::LOG_MAIL);

    assert_eq!(sink.events(), vec![]);
}

#[test]
fn test_min_level_round_trip_by_name() {
    let sink = MockSink::new();
    let mut logger = Logger::with_defaults(&sink);

    logger.set_min_level_str("alert").unwrap();
    assert_eq!(logger.min_priority(), c_int::from(Level::Alert));
    assert_eq!(logger.min_level_name(), Some("alert"));

    let err = logger.set_min_level_str("loud").unwrap_err();
    assert_eq!(err.name(), "loud");
    // A failed parse leaves the cutoff untouched.
    assert_eq!(logger.min_level(), Some(Level::Alert));
}

#[test]
fn test_raw_priority_override() {
    let sink = MockSink::new();
    let mut logger = Logger::with_defaults(&sink);

    logger.set_min_priority(42);
    assert_eq!(logger.min_priority(), 42);
    assert_eq!(logger.min_level(), None);
    assert_eq!(logger.min_level_name(), None);

    // Raw cutoffs still filter by plain integer comparison.
    logger.set_min_priority(-1);
    logger.emergency("dropped", &Context::new()).unwrap();
    assert_eq!(sink.events(), vec![]);
}

#[test]
fn test_tightening_the_cutoff_drops_messages() {
    let sink = MockSink::new();
    let mut logger = Logger::new(&sink, Some("test-app"), Level::Debug);

    logger.notice("passes", &Context::new()).unwrap();
    logger.set_min_level(Level::Error);
    logger.notice("dropped", &Context::new()).unwrap();
    logger.error("also passes", &Context::new()).unwrap();

    assert_eq!(
        sink.writes(),
        vec![
            (libc::LOG_NOTICE, "passes".to_string()),
            (libc::LOG_ERR, "also passes".to_string()),
        ]
    );
}

#[test]
fn test_concurrent_first_log_opens_once() {
    use std::sync::Arc;
    use std::thread;

    let sink = Arc::new(MockSink::new());
    let logger = Arc::new(Logger::new(Arc::clone(&sink), Some("test-app"), Level::Debug));

    let threads: Vec<_> = (0..8)
        .map(|i| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                logger.info(&format!("message {}", i), &Context::new()).unwrap();
            })
        })
        .collect();

    for thread in threads {
        thread.join().unwrap();
    }

    assert_eq!(sink.open_count(), 1);
    assert_eq!(sink.writes().len(), 8);
}
