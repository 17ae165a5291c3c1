use rstest::rstest;
use seqfsm_circuits::prelude::*;

use crate::test_harness::setup_test_logging;

fn clean_trace(counter: &mut DebounceCounter, raw: &str) -> String {
    let raw = parse_bits(raw).expect("valid samples");
    format_bits(&run_clocked(counter, raw))
}

#[rstest]
#[case::steady_high("1111_1111", "0000_0011")]
#[case::bounce_then_settle("1010_1111_111", "0000_0000_001")]
#[case::short_pulses("1111_1101_1111_11", "0000_0000_0000_01")]
#[case::release("1111_1110_0", "0000_0010_0")]
fn test_debounce_traces(#[case] raw: &str, #[case] clean: &str) {
    setup_test_logging();
    let mut counter = DebounceCounter::new();
    assert_eq!(clean_trace(&mut counter, raw), clean.replace('_', ""));
}

#[test]
fn test_count_saturates_at_terminal() {
    let mut counter = DebounceCounter::new();
    let counts: Vec<u8> = (0..10)
        .map(|_| {
            counter.tick(false, true);
            counter.count()
        })
        .collect();
    assert_eq!(counts, vec![1, 2, 3, 4, 5, 6, 7, 7, 7, 7]);
}

#[test]
fn test_wider_counter_waits_longer() {
    let mut counter = DebounceCounter::with_width(4).expect("4 bits is supported");
    let trace = clean_trace(&mut counter, "1111_1111_1111_1111");
    assert_eq!(trace, "0000_0000_0000_0011".replace('_', ""));
}

#[test]
fn test_invalid_config_is_rejected() {
    let cfg = Config::builder().debounce_width(0).build();
    assert_eq!(
        DebounceCounter::from_config(&cfg),
        Err(FsmError::InvalidCounterWidth(0))
    );
}

#[test]
fn test_reset_through_clocked_trait() {
    let mut counter = DebounceCounter::new();
    clean_trace(&mut counter, "1111111");
    assert!(counter.clean());
    Clocked::reset(&mut counter);
    assert_eq!(counter.count(), 0);
    assert!(!counter.clean());
}
