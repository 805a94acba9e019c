use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RicochetError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RicochetError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        RicochetError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RicochetError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
