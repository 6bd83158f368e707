use voicetrim::silero::SileroScorer;

#[test]
fn silero_scorer_errors_on_missing_model() {
    let msg = match SileroScorer::new("tests/fixtures/does-not-exist.onnx") {
        Ok(_) => panic!("expected error for missing model"),
        Err(err) => format!("{err:#}"),
    };
    assert!(
        msg.contains("failed to load Silero VAD model"),
        "unexpected error message:\n{msg}"
    );
}
