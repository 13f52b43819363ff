use std::{fs, path::PathBuf};

use tempfile::tempdir;

use paddock::{ArtifactKind, PaddockError, SourceError};
use paddock_cli::{Args, run};

/// The shared circuit record used by the library integration tests
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("paddock")
        .join("tests")
        .join("fixtures")
        .join("circuitoEsquema.xml")
}

fn args(input: PathBuf, out_dir: PathBuf, kinds: Vec<ArtifactKind>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        kinds,
        out_dir: out_dir.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_writes_all_artifacts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    run(&args(fixture_path(), temp_dir.path().to_path_buf(), Vec::new()))
        .expect("Run failed on the fixture record");

    for kind in ArtifactKind::ALL {
        let path = temp_dir.path().join(kind.default_file_name());
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("{} was not written: {err}", path.display()));
        assert!(!content.is_empty(), "{} is empty", path.display());
    }

    let svg = fs::read_to_string(temp_dir.path().join("altimetria.svg")).unwrap();
    assert!(svg.starts_with("<?xml version='1.0' encoding='utf-8'?>"));
    let html = fs::read_to_string(temp_dir.path().join("InfoCircuito.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    let kml = fs::read_to_string(temp_dir.path().join("circuito.kml")).unwrap();
    assert!(kml.contains("<kml xmlns=\"http://www.opengis.net/kml/2.2\">"));
}

#[test]
fn e2e_smoke_test_selected_kind_only() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    run(&args(
        fixture_path(),
        temp_dir.path().to_path_buf(),
        vec![ArtifactKind::Track],
    ))
    .expect("Run failed on the fixture record");

    let written: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(written, ["circuito.kml"]);
}

#[test]
fn e2e_smoke_test_missing_name_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    let record = fs::read_to_string(fixture_path())
        .unwrap()
        .replace("<nombre>Sepang International Circuit</nombre>", "");
    let input = temp_dir.path().join("sin_nombre.xml");
    fs::write(&input, record).unwrap();

    let err = run(&args(input, out_dir.clone(), Vec::new())).unwrap_err();

    assert!(
        matches!(&err, PaddockError::Source(SourceError::MissingField(field)) if field == "nombre"),
        "Unexpected error: {err:?}"
    );
    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
}

#[test]
fn e2e_smoke_test_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let err = run(&args(
        temp_dir.path().join("absent.xml"),
        temp_dir.path().to_path_buf(),
        Vec::new(),
    ))
    .unwrap_err();

    assert!(matches!(err, PaddockError::Io(_)));
}
