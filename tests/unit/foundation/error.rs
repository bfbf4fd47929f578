use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CarverError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(CarverError::font("x").to_string().contains("font error:"));
    assert!(CarverError::io("x").to_string().contains("io error:"));
    assert!(
        CarverError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        CarverError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        CarverError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CarverError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
