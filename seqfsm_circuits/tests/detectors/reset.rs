use rstest::rstest;
use seqfsm_circuits::prelude::*;

use crate::detector_test;

detector_test!(
    name: test_mealy_reset_mid_prefix,
    detector: Mealy1101,
    stimulus: "1101",
    reset: "0010",
    expect: "0000",
    states: "1201"
);

detector_test!(
    name: test_mealy_reset_on_completing_tick,
    detector: Mealy1101,
    stimulus: "1101",
    reset: "0001",
    expect: "0000",
    states: "1230"
);

detector_test!(
    name: test_moore_reset_on_entering_match,
    detector: Moore1100,
    stimulus: "1100",
    reset: "0001",
    expect: "0000",
    states: "1230"
);

detector_test!(
    name: test_mealy_held_reset,
    detector: Mealy1101,
    stimulus: "1101",
    reset: "1111",
    expect: "0000",
    states: "0000"
);

detector_test!(
    name: test_moore_held_reset,
    detector: Moore1100,
    stimulus: "1100",
    reset: "1111",
    expect: "0000",
    states: "0000"
);

detector_test!(
    name: test_moore_match_after_release,
    detector: Moore1100,
    stimulus: "11_1100",
    reset: "11_0000",
    expect: "00_0001",
    states: "00_1234"
);

fn assert_reset_from_every_state<C>(mut make: impl FnMut(u8) -> Option<C>, codes: u8)
where
    C: Clocked<Input = bool, Output = bool>,
{
    for code in 0..codes {
        for input in [false, true] {
            let mut circuit = make(code).expect("code is in the state set");
            assert!(!circuit.tick(true, input), "reset tick from code {code} reported a match");
        }
    }
}

#[test]
fn test_reset_tick_never_matches() {
    assert_reset_from_every_state(|c| Mealy1101Detector::from_encoded(c).ok(), 4);
    assert_reset_from_every_state(|c| Moore1100Detector::from_encoded(c).ok(), 5);
}

#[rstest]
fn test_reset_returns_every_state_to_s0(#[values(false, true)] input: bool) {
    for &state in Mealy1101State::ALL {
        let mut det = Mealy1101Detector::from_encoded(state.encoding()).expect("valid code");
        det.tick(true, input);
        assert_eq!(det.state(), Mealy1101State::S0);
    }
    for &state in Moore1100State::ALL {
        let mut det = Moore1100Detector::from_encoded(state.encoding()).expect("valid code");
        det.tick(true, input);
        assert_eq!(det.state(), Moore1100State::S0);
    }
}
