use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ArtgenError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ArtgenError::render("x").to_string().contains("render error:"));
    assert!(ArtgenError::config("x").to_string().contains("config error:"));
    assert!(
        ArtgenError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ArtgenError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
