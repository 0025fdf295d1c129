use vermeer_core::{format_bytes, Artifact, ArtifactKind, ArtifactPayload};

#[test]
fn size_tracks_payload_length() {
    let payload = ArtifactPayload::new(vec![0u8; 2048], "video/mp4");
    let artifact = Artifact::new(ArtifactKind::Video, "test clip", payload);

    assert_eq!(artifact.size_bytes(), 2048);
    assert_eq!(artifact.payload().len(), 2048);
}

#[test]
fn fresh_artifacts_get_distinct_ids() {
    let a = Artifact::new(
        ArtifactKind::Image,
        "a",
        ArtifactPayload::new(vec![1], "image/png"),
    );
    let b = Artifact::new(
        ArtifactKind::Image,
        "b",
        ArtifactPayload::new(vec![1], "image/png"),
    );

    assert_ne!(a.id(), b.id());
}

#[test]
fn kind_round_trips_through_strings() {
    for kind in [ArtifactKind::Image, ArtifactKind::Video, ArtifactKind::Audio] {
        let parsed: ArtifactKind = kind.as_str().parse().expect("known kind");
        assert_eq!(parsed, kind);
        assert_eq!(format!("{}", kind), kind.as_str());
    }

    assert!("hologram".parse::<ArtifactKind>().is_err());
}

#[test]
fn format_bytes_picks_sensible_units() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1023), "1023 B");
    assert_eq!(format_bytes(1024), "1.0 KB");
    assert_eq!(format_bytes(1536), "1.5 KB");
    assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0 GB");
}
