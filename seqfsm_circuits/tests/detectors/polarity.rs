use seqfsm_circuits::prelude::*;

lazy_static::lazy_static! {
    static ref ACTIVE_HIGH: Config = Config::builder().active_high_reset().build();
    static ref ACTIVE_LOW: Config = Config::default();
}

/// Drive a detector from raw reset line levels and return its outputs.
fn clock_levels<V: OutputPolicy>(config: &Config, levels: &str, stimulus: &str) -> String {
    let levels = parse_bits(levels).expect("valid reset levels");
    let stimulus = parse_bits(stimulus).expect("valid stimulus");
    let mut det = SequenceDetector::<V>::from_config(config);
    let outputs: Vec<bool> = levels
        .into_iter()
        .zip(stimulus)
        .map(|(level, bit)| det.clock(level, bit))
        .collect();
    format_bits(&outputs)
}

#[test]
fn test_active_low_idle_level_is_high() {
    assert_eq!(clock_levels::<Mealy1101>(&ACTIVE_LOW, "1111", "1101"), "0001");
    assert_eq!(clock_levels::<Mealy1101>(&ACTIVE_LOW, "1101", "1101"), "0000");
}

#[test]
fn test_active_high_idle_level_is_low() {
    assert_eq!(clock_levels::<Moore1100>(&ACTIVE_HIGH, "0000", "1100"), "0001");
    assert_eq!(clock_levels::<Moore1100>(&ACTIVE_HIGH, "0001", "1100"), "0000");
}

#[test]
fn test_polarity_is_carried_from_config() {
    let det = Mealy1101Detector::from_config(&ACTIVE_HIGH);
    assert_eq!(det.polarity(), ResetPolarity::ActiveHigh);
    assert_eq!(Mealy1101Detector::new().polarity(), ResetPolarity::ActiveLow);
}
