use std::fs;
use std::path::{Path, PathBuf};

use cardnews::pipeline;
use cardnews::RenderJob;
use sha2::{Digest, Sha256};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_html_matches_fixture() {
    let job = RenderJob::from_path(Path::new("tests/goldens/decks/sample.json")).expect("read fixture");
    let prepared = pipeline::prepare(&job);
    assert_eq!(prepared.len(), 6);

    // one digest line per slide, keyed by output stem
    let digests: String = prepared
        .iter()
        .map(|p| format!("{} {}\n", p.file_stem, hex::encode(Sha256::digest(p.html.as_bytes()))))
        .collect();

    let expected_path = golden_path("sample.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digests).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    assert!(
        expected_path.exists(),
        "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it",
        expected_path
    );

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    for (got, want) in digests.lines().zip(exp.lines()) {
        assert_eq!(got, want, "HTML changed; rerun with UPDATE_GOLDENS=1 if intended");
    }
    assert_eq!(digests.lines().count(), exp.lines().count());
}

#[test]
fn fixture_renders_deterministically() {
    let job = RenderJob::from_path(Path::new("tests/goldens/decks/sample.json")).expect("read fixture");
    let first = pipeline::prepare(&job);
    let second = pipeline::prepare(&job);
    assert_eq!(first, second);

    let stems: Vec<_> = first.iter().map(|p| p.file_stem.as_str()).collect();
    assert_eq!(
        stems,
        [
            "sample_01_cover",
            "sample_02_problem",
            "sample_03_point",
            "sample_04_comparison",
            "sample_05_summary",
            "sample_06_cta",
        ]
    );
    // numeric `number` is accepted and printed as given
    assert!(first[2].html.contains("POINT 1"));
}
