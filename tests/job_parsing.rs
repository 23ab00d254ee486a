//! Reading decks from disk and applying command-line overrides

use cardnews::assets::ProfileSpec;
use cardnews::{Error, JobOverrides, RenderJob, SlideKind};

#[test]
fn reads_both_document_shapes_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let array = dir.path().join("array.json");
    std::fs::write(&array, r#"[{"type":"cover","title":"Hi"},{"type":"cta"}]"#).unwrap();
    let object = dir.path().join("object.json");
    std::fs::write(
        &object,
        r#"{"theme":"light_clean","slides":[{"type":"summary","items":["x"]}]}"#,
    )
    .unwrap();

    let a = RenderJob::from_path(&array).unwrap();
    assert_eq!(a.slides.len(), 2);
    assert_eq!(a.slides[0].kind(), Some(SlideKind::Cover));

    let o = RenderJob::from_path(&object).unwrap();
    assert_eq!(o.theme, "light_clean");
    assert_eq!(o.slides[0].items, ["x"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RenderJob::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_slide_is_an_input_error() {
    let err = RenderJob::from_json_str(r#"[{"type":"summary","items":"not a list"}]"#).unwrap_err();
    assert!(matches!(err, Error::InputError(_)));
}

#[test]
fn unknown_fields_are_ignored() {
    let job = RenderJob::from_json_str(r#"[{"type":"point","color":"red","heading":"H"}]"#).unwrap();
    assert_eq!(job.slides[0].heading.as_deref(), Some("H"));
}

#[test]
fn cli_overrides_replace_document_defaults() {
    let mut job = RenderJob::from_json_str(
        r#"{"footer_name":"Doc","profile_image":"doc.png","slides":[{"type":"cover"}]}"#,
    )
    .unwrap();
    job.apply_overrides(JobOverrides {
        footer_name: Some("Cli".into()),
        profile: Some(ProfileSpec::parse_cli("cover=cli.png")),
        theme: Some("warm_ivory".into()),
        ..Default::default()
    });

    assert_eq!(job.defaults.footer_name.as_deref(), Some("Cli"));
    assert_eq!(job.theme, "warm_ivory");
    let ProfileSpec::PerRole(map) = &job.profile else {
        panic!("expected per-role profile");
    };
    assert_eq!(map["cover"], "cli.png");
}
