use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PromoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PromoError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        PromoError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        PromoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = PromoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk full"));
}
