//! Integration tests for the Converter API
//!
//! These tests run the full pipeline on a complete circuit record.

use paddock::{ArtifactKind, Converter, PaddockError, SourceError, config::AppConfig};

const FIXTURE: &str = include_str!("fixtures/circuitoEsquema.xml");

fn render(kind: ArtifactKind) -> String {
    let converter = Converter::default();
    let record = converter.load(FIXTURE).expect("Failed to load fixture");
    let bytes = converter.render(kind, &record).expect("Failed to render");
    String::from_utf8(bytes).expect("Artifact is not UTF-8")
}

#[test]
fn test_render_every_kind() {
    let converter = Converter::new(AppConfig::default());
    let record = converter.load(FIXTURE).expect("Failed to load fixture");

    for kind in ArtifactKind::ALL {
        let result = converter.render(kind, &record);
        assert!(result.is_ok(), "Failed to render {kind}: {:?}", result.err());
    }
}

#[test]
fn test_chart_is_well_formed_svg() {
    let svg = render(ArtifactKind::Chart);
    let doc = roxmltree::Document::parse(&svg).expect("Chart is not well-formed XML");

    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("viewBox"), Some("0 0 1000 600"));

    let polyline = root
        .children()
        .find(|n| n.has_tag_name("polyline"))
        .expect("Chart has no silhouette");
    let points: Vec<_> = polyline
        .attribute("points")
        .unwrap_or_default()
        .split(' ')
        .collect();
    // Origin, six segments and the two closing corners.
    assert_eq!(points.len(), 9);
    assert_eq!(points[0], "80.0,520.0");
    assert_eq!(points[6], "920.0,480.0");
    assert_eq!(&points[7..], ["920.0,520.0", "80.0,520.0"]);

    assert!(svg.contains("Perfil Altimétrico - Sepang International Circuit"));
    assert!(svg.contains(">5543m<"));
}

#[test]
fn test_track_closes_at_origin() {
    let kml = render(ArtifactKind::Track);
    let doc = roxmltree::Document::parse(&kml).expect("Overlay is not well-formed XML");

    let coordinates = doc
        .descendants()
        .find(|n| n.has_tag_name("LineString"))
        .and_then(|n| n.children().find(|c| c.has_tag_name("coordinates")))
        .and_then(|n| n.text())
        .expect("Overlay has no line");
    let lines: Vec<_> = coordinates.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines.first(), Some(&"101.738,2.7606"));
    assert_eq!(lines.last(), Some(&"101.738,2.7606"));
    assert!(kml.contains("<name>Trazado Sepang International Circuit</name>"));
}

#[test]
fn test_info_page_sections() {
    let html = render(ArtifactKind::Info);

    assert!(html.starts_with("<!DOCTYPE html>\n"));
    for heading in [
        "<h2>Información del circuito - Sepang International Circuit</h2>",
        "<h2>Información General</h2>",
        "<h2>Coordenadas de Origen</h2>",
        "<h2>Referencias</h2>",
        "<h2>Multimedia</h2>",
        "<h2>Resultados</h2>",
    ] {
        assert!(html.contains(heading), "Missing {heading}");
    }
    assert!(html.contains("<p>Longitud: 5543 m</p>"));
    assert!(html.contains("<figcaption>Curva Final</figcaption>"));
    assert!(html.contains("<figcaption>Video del circuito: Vuelta Rapida</figcaption>"));
    assert!(html.contains("<dd>Álex Márquez - 467 puntos</dd>"));
}

#[test]
fn test_rendering_is_deterministic() {
    for kind in ArtifactKind::ALL {
        assert_eq!(render(kind), render(kind), "{kind} output differs between runs");
    }
}

#[test]
fn test_missing_name_is_source_error() {
    let source = FIXTURE.replace(
        "<nombre>Sepang International Circuit</nombre>",
        "",
    );
    let converter = Converter::default();
    let record = converter.load(&source).expect("Failed to load record");

    for kind in ArtifactKind::ALL {
        let err = converter.render(kind, &record).unwrap_err();
        assert!(
            matches!(&err, PaddockError::Source(SourceError::MissingField(field)) if field == "nombre"),
            "Unexpected error for {kind}: {err:?}"
        );
    }
}

#[test]
fn test_malformed_record_is_load_error() {
    let converter = Converter::default();
    let err = converter.load("<circuito><nombre>Sepang</circuito>").unwrap_err();

    match err {
        PaddockError::Load { err, src } => {
            assert!(matches!(err, SourceError::Xml { .. }));
            assert_eq!(src, "<circuito><nombre>Sepang</circuito>");
        }
        other => panic!("Expected load error, got {other:?}"),
    }
}
