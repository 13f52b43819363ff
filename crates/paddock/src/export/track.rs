//! KML track overlay.

use log::debug;

use paddock_core::{
    kml::{KmlDocument, LineString, LineStyle},
    markup::Document,
};

use crate::{PaddockError, config::TrackConfig, export::Assembler, model::TrackModel};

/// Track overlay: a finish-line marker and the closed circuit path.
#[derive(Debug, Clone, Copy)]
pub struct TrackOverlay<'a> {
    config: &'a TrackConfig,
}

impl<'a> TrackOverlay<'a> {
    pub fn new(config: &'a TrackConfig) -> Self {
        Self { config }
    }
}

impl Assembler for TrackOverlay<'_> {
    type Model = TrackModel;

    fn assemble(&self, model: &TrackModel) -> Result<Document, PaddockError> {
        let config = self.config;
        let point_mode = config.point_altitude_mode().map_err(PaddockError::Config)?;
        let line_mode = config.line_altitude_mode().map_err(PaddockError::Config)?;
        debug!(name = model.name, segments = model.path.len(); "Assembling track overlay");

        let mut kml = KmlDocument::new()?;
        kml.point_placemark(
            config.finish_label(),
            &format!("{} - {}, {}", model.name, model.locality, model.country),
            model.origin.with_altitude(0.0),
            point_mode,
        )?;
        kml.name(&format!("Trazado {}", model.name))?;

        // The loop starts and ends at the finish line.
        let mut coordinates = Vec::with_capacity(model.path.len() + 2);
        coordinates.push(model.origin);
        coordinates.extend_from_slice(&model.path);
        coordinates.push(model.origin);

        let style = LineStyle::new(config.line_color(), config.line_width());
        kml.line_placemark(&LineString {
            coordinates: &coordinates,
            extrude: config.extrude(),
            tessellate: config.tessellate(),
            altitude_mode: line_mode,
            style: &style,
        })?;

        Ok(kml.into_document())
    }
}


#[cfg(test)]
mod proptest_tests {
    use paddock_core::kml::Coordinate;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
        (-180.0..180.0f64, -90.0..90.0f64).prop_map(|(lon, lat)| Coordinate::new(lon, lat))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// The first and last emitted coordinates are the origin.
    fn check_closing_loop(origin: Coordinate, path: Vec<Coordinate>) -> Result<(), TestCaseError> {
        let config = TrackConfig::default();
        let model = TrackModel {
            name: "N".to_string(),
            locality: "L".to_string(),
            country: "C".to_string(),
            origin,
            path,
        };
        let doc = TrackOverlay::new(&config)
            .assemble(&model)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        let text = doc
            .root_element()
            .descendants()
            .find(|e| e.tag() == "LineString")
            .and_then(|ls| ls.child("coordinates"))
            .and_then(|c| c.text())
            .unwrap_or_default();
        let lines: Vec<_> = text.lines().collect();
        let origin = origin.to_string();

        prop_assert_eq!(lines.len(), model.path.len() + 2);
        prop_assert_eq!(lines.first().copied(), Some(origin.as_str()));
        prop_assert_eq!(lines.last().copied(), Some(origin.as_str()));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn closing_loop(
            origin in coordinate_strategy(),
            path in prop::collection::vec(coordinate_strategy(), 1..20),
        ) {
            check_closing_loop(origin, path)?;
        }
    }
}
