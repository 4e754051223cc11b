//! Tests for logger filtering and line format.

use levelog::{Level, LevelLogger};
use regex::Regex;

/// Logger on an in-memory sink with the timestamp column dropped.
fn capture(threshold: Level, prefix: &str) -> LevelLogger<Vec<u8>> {
    LevelLogger::builder()
        .level(threshold)
        .prefix(prefix)
        .without_timestamp()
        .writer(Vec::new())
        .build()
}

fn lines(logger: LevelLogger<Vec<u8>>) -> Vec<String> {
    String::from_utf8(logger.into_writer())
        .unwrap()
        .lines()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn info_threshold_filters_debug() {
    let mut logger = capture(Level::INFO, "");
    logger.info("info");
    logger.warning("warning");
    logger.debug("debug");
    assert_eq!(lines(logger), ["INFO    info", "WARNING warning"]);
}

#[test]
fn error_is_always_written() {
    let mut logger = capture(Level::INFO, "");
    logger.error("error");
    assert_eq!(lines(logger), ["ERROR   error"]);
}

#[test]
fn error_passes_the_lowest_threshold() {
    let mut logger = capture(Level::ERROR, "");
    logger.warning("hidden");
    logger.info("hidden");
    logger.error("shown");
    assert_eq!(lines(logger), ["ERROR   shown"]);
}

#[test]
fn emitted_iff_threshold_rank_covers_level() {
    let ranks = -1..=4;
    for threshold in ranks.clone() {
        for rank in ranks.clone() {
            let mut logger = capture(Level::new(threshold), "");
            logger.log(Level::new(rank), "m");
            let expected = usize::from(rank < 0 || threshold >= rank);
            assert_eq!(
                lines(logger).len(),
                expected,
                "threshold {threshold}, level {rank}"
            );
        }
    }
}

#[test]
fn custom_rank_uses_debug_label() {
    let mut logger = capture(Level::new(10), "");
    logger.log(Level::new(7), "verbose");
    assert_eq!(lines(logger), ["DEBUG   verbose"]);
}

#[test]
fn custom_rank_above_threshold_is_suppressed() {
    let mut logger = capture(Level::DEBUG, "");
    logger.log(Level::new(3), "too verbose");
    assert!(lines(logger).is_empty());
}

#[test]
fn negative_custom_rank_is_an_error() {
    let mut logger = capture(Level::ERROR, "");
    logger.log(Level::new(-5), "urgent");
    assert_eq!(lines(logger), ["ERROR   urgent"]);
}

#[test]
fn set_threshold_takes_effect_on_next_call() {
    let mut logger = capture(Level::WARNING, "");
    logger.debug("before");
    logger.set_threshold(Level::DEBUG);
    assert_eq!(logger.threshold(), Level::DEBUG);
    logger.debug("after");
    assert_eq!(lines(logger), ["DEBUG   after"]);
}

#[test]
fn is_enabled_matches_filter() {
    let logger = capture(Level::INFO, "");
    assert!(logger.is_enabled(Level::ERROR));
    assert!(logger.is_enabled(Level::WARNING));
    assert!(logger.is_enabled(Level::INFO));
    assert!(!logger.is_enabled(Level::DEBUG));
}

#[test]
fn prefix_is_normalized() {
    assert_eq!(
        LevelLogger::with_writer(Level::INFO, "LOGGER", Vec::new()).prefix(),
        "LOGGER "
    );
    assert_eq!(
        LevelLogger::with_writer(Level::INFO, "LOGGER ", Vec::new()).prefix(),
        "LOGGER "
    );
    assert_eq!(LevelLogger::with_writer(Level::INFO, "", Vec::new()).prefix(), "");
}

#[test]
fn new_binds_stderr_with_normalized_prefix() {
    let logger = LevelLogger::new(Level::INFO, "LOGGER");
    assert_eq!(logger.prefix(), "LOGGER ");
    assert_eq!(logger.threshold(), Level::INFO);
}

#[test]
fn prefix_leads_the_line() {
    let mut logger = capture(Level::INFO, "LOGGER");
    logger.info("hello");
    assert_eq!(lines(logger), ["LOGGER INFO    hello"]);
}

#[test]
fn default_line_has_standard_timestamp() {
    let mut logger = LevelLogger::with_writer(Level::INFO, "LOGGER", Vec::new());
    logger.info("hello");
    let out = String::from_utf8(logger.into_writer()).unwrap();
    let pattern =
        Regex::new(r"^LOGGER \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} INFO    hello\n$").unwrap();
    assert!(pattern.is_match(&out), "unexpected line: {out:?}");
}

#[test]
fn custom_timestamp_format() {
    let mut logger = LevelLogger::builder()
        .timestamp_format("%Y")
        .writer(Vec::new())
        .build();
    logger.warning("w");
    let out = String::from_utf8(logger.into_writer()).unwrap();
    let pattern = Regex::new(r"^\d{4} WARNING w\n$").unwrap();
    assert!(pattern.is_match(&out), "unexpected line: {out:?}");
}

#[test]
fn one_line_per_call() {
    let mut logger = capture(Level::DEBUG, "");
    logger.info("ends with newline\n");
    logger.info("plain");
    let out = String::from_utf8(logger.into_writer()).unwrap();
    assert_eq!(out, "INFO    ends with newline\nINFO    plain\n");
}

#[test]
fn macros_format_arguments() {
    let mut logger = capture(Level::new(9), "");
    let threshold = logger.threshold();
    levelog::debug!(logger, "current level is {threshold}");
    levelog::info!(logger, "{} + {} = {}", 1, 2, 3);
    levelog::warning!(logger, "{:>4}", "x");
    levelog::error!(logger, "code {:03}", 7);
    levelog::log!(logger, Level::new(9), "{:?}", "quoted");
    assert_eq!(
        lines(logger),
        [
            "DEBUG   current level is 9",
            "INFO    1 + 2 = 3",
            "WARNING    x",
            "ERROR   code 007",
            "DEBUG   \"quoted\"",
        ]
    );
}

#[test]
fn builder_defaults() {
    let logger = LevelLogger::builder().writer(Vec::new()).build();
    assert_eq!(logger.threshold(), Level::INFO);
    assert_eq!(logger.prefix(), "");
}

#[test]
fn writer_accessors() {
    let mut logger = capture(Level::INFO, "");
    logger.info("a");
    assert_eq!(logger.writer().as_slice(), b"INFO    a\n");
    logger.writer_mut().clear();
    logger.info("b");
    assert_eq!(lines(logger), ["INFO    b"]);
}
