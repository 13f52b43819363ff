//! SVG elevation chart.

use log::debug;

use paddock_core::{
    geometry::Point,
    markup::{Document, format_number},
    projection::{Profile, project},
    svg::{Font, Stroke, SvgCanvas},
};

use crate::{PaddockError, config::ChartConfig, export::Assembler, model::ProfileModel};

/// Vertical position of the title baseline.
const TITLE_Y: f64 = 30.0;
/// Vertical position of the subtitle baseline.
const SUBTITLE_Y: f64 = 50.0;
/// Distance of the horizontal axis caption from the bottom edge.
const AXIS_TITLE_INSET: f64 = 20.0;
/// Distance of distance labels below the axis.
const DISTANCE_LABEL_GAP: f64 = 15.0;
/// Distance of altitude labels left of the axis.
const ALTITUDE_LABEL_GAP: f64 = 10.0;
/// Baseline shift that centers altitude labels on their tick.
const ALTITUDE_LABEL_SHIFT: f64 = 5.0;
const TICK_LENGTH: f64 = 5.0;

/// Elevation profile chart: filled silhouette over labelled axes.
#[derive(Debug, Clone, Copy)]
pub struct ProfileChart<'a> {
    config: &'a ChartConfig,
}

impl<'a> ProfileChart<'a> {
    pub fn new(config: &'a ChartConfig) -> Self {
        Self { config }
    }

    fn font(&self, size: u16) -> Font {
        Font::new(self.config.font_family(), size)
    }
}

impl Assembler for ProfileChart<'_> {
    type Model = ProfileModel;

    fn assemble(&self, model: &ProfileModel) -> Result<Document, PaddockError> {
        let config = self.config;
        let profile = Profile::from_segments(model.origin_altitude, model.segments.iter().copied())?;
        let frame = config.frame()?;
        let projection = project(&profile, &frame)?;
        debug!(
            name = model.name,
            samples = profile.samples().len();
            "Assembling elevation chart"
        );

        let mut canvas = SvgCanvas::new(frame.width(), frame.height())?;
        let root = canvas.root();

        canvas.rect(
            root,
            Point::default(),
            f64::from(frame.width()),
            f64::from(frame.height()),
            config.background(),
            &Stroke::none(),
        )?;

        let title_style = format!(
            "text-anchor: middle; font-weight: bold; fill: {}",
            config.accent()
        );
        canvas.text(
            root,
            &format!("Perfil Altimétrico - {}", model.name),
            Point::new(frame.center_x(), TITLE_Y),
            &self.font(config.title_size()),
            Some(&title_style),
        )?;
        let subtitle_style = format!("text-anchor: middle; fill: {}", config.axis_color());
        canvas.text(
            root,
            &model.locality,
            Point::new(frame.center_x(), SUBTITLE_Y),
            &self.font(config.subtitle_size()),
            Some(&subtitle_style),
        )?;

        canvas.polyline(
            root,
            &projection.closed_for_fill(),
            &Stroke::new(config.accent(), config.profile_width()),
            config.fill(),
        )?;

        let axis = Stroke::new(config.axis_color(), config.axis_width());
        canvas.line(root, frame.bottom_left(), frame.bottom_right(), &axis)?;
        canvas.line(root, frame.top_left(), frame.bottom_left(), &axis)?;

        let tick = Stroke::new(config.axis_color(), config.tick_width());
        let label_font = self.font(config.label_size());

        let distance_style = format!("text-anchor: middle; fill: {}", config.label_color());
        for mark in projection.distance_ticks(config.tick_count()) {
            let x = mark.position();
            canvas.text(
                root,
                &format!("{}m", format_number(mark.value(), 0)),
                Point::new(x, frame.bottom() + DISTANCE_LABEL_GAP),
                &label_font,
                Some(&distance_style),
            )?;
            canvas.line(
                root,
                Point::new(x, frame.bottom()),
                Point::new(x, frame.bottom() + TICK_LENGTH),
                &tick,
            )?;
        }

        let altitude_style = format!("text-anchor: end; fill: {}", config.label_color());
        for mark in projection.altitude_ticks(config.tick_count()) {
            let y = mark.position();
            canvas.text(
                root,
                &format!("{}m", format_number(mark.value(), 1)),
                Point::new(frame.left() - ALTITUDE_LABEL_GAP, y + ALTITUDE_LABEL_SHIFT),
                &label_font,
                Some(&altitude_style),
            )?;
            canvas.line(
                root,
                Point::new(frame.left() - TICK_LENGTH, y),
                Point::new(frame.left(), y),
                &tick,
            )?;
        }

        let axis_title_font = self.font(config.axis_title_size());
        canvas.text(
            root,
            "Distancia (m)",
            Point::new(frame.center_x(), f64::from(frame.height()) - AXIS_TITLE_INSET),
            &axis_title_font,
            Some(&format!(
                "text-anchor: middle; font-weight: bold; fill: {}",
                config.axis_color()
            )),
        )?;
        canvas.text(
            root,
            "Altitud (m)",
            Point::new(AXIS_TITLE_INSET, frame.center_y()),
            &axis_title_font,
            Some(&format!(
                "text-anchor: middle; font-weight: bold; writing-mode: tb; \
                 glyph-orientation-vertical: 0; fill: {}",
                config.axis_color()
            )),
        )?;

        Ok(canvas.into_document())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use paddock_core::{markup::ElementRef, projection::ProjectionError};

    use super::*;

    fn model(segments: Vec<(f64, f64)>) -> ProfileModel {
        ProfileModel {
            name: "Sepang".to_string(),
            locality: "Sepang, Selangor".to_string(),
            origin_altitude: 100.0,
            segments,
        }
    }

    fn texts(doc: &Document) -> Vec<&str> {
        doc.root_element()
            .children()
            .filter(|e| e.tag() == "text")
            .filter_map(|e| e.text())
            .collect()
    }

    fn polyline(doc: &Document) -> ElementRef<'_> {
        doc.root_element().child("polyline").unwrap()
    }

    #[test]
    fn test_worked_example() {
        let config = ChartConfig::default();
        let doc = ProfileChart::new(&config)
            .assemble(&model(vec![(50.0, 120.0), (70.0, 110.0)]))
            .unwrap();

        assert_eq!(
            polyline(&doc).attribute("points"),
            Some("80.0,520.0 430.0,80.0 920.0,300.0 920.0,520.0 80.0,520.0")
        );
    }

    #[test]
    fn test_labels() {
        let config = ChartConfig::default();
        let doc = ProfileChart::new(&config)
            .assemble(&model(vec![(50.0, 120.0), (70.0, 110.0)]))
            .unwrap();

        let labels = texts(&doc);
        assert_eq!(labels[0], "Perfil Altimétrico - Sepang");
        assert_eq!(labels[1], "Sepang, Selangor");
        assert_eq!(&labels[2..8], ["0m", "24m", "48m", "72m", "96m", "120m"]);
        assert_eq!(
            &labels[8..14],
            ["100.0m", "104.0m", "108.0m", "112.0m", "116.0m", "120.0m"]
        );
        assert_eq!(&labels[14..], ["Distancia (m)", "Altitud (m)"]);
    }

    #[test]
    fn test_element_counts() {
        let config = ChartConfig::default();
        let doc = ProfileChart::new(&config)
            .assemble(&model(vec![(50.0, 120.0), (70.0, 110.0)]))
            .unwrap();

        let count = |tag: &str| {
            doc.root_element()
                .children()
                .filter(|e| e.tag() == tag)
                .count()
        };
        assert_eq!(count("rect"), 1);
        assert_eq!(count("polyline"), 1);
        // Two axes plus six ticks per axis.
        assert_eq!(count("line"), 14);
        assert_eq!(count("text"), 16);
    }

    #[test]
    fn test_altitude_tick_lines_sit_on_ticks() {
        let config = ChartConfig::default();
        let doc = ProfileChart::new(&config)
            .assemble(&model(vec![(50.0, 120.0), (70.0, 110.0)]))
            .unwrap();

        let top_tick = doc
            .root_element()
            .children()
            .filter(|e| e.tag() == "line" && e.attribute("x1") == Some("75.0"))
            .last()
            .unwrap();
        let y: f64 = top_tick.attribute("y1").unwrap().parse().unwrap();
        assert_approx_eq!(f64, y, 80.0);
    }

    #[test]
    fn test_flat_profile_is_drawn_centered() {
        let config = ChartConfig::default();
        let flat = ProfileModel {
            origin_altitude: 120.0,
            ..model(vec![(10.0, 120.0), (20.0, 120.0)])
        };
        let doc = ProfileChart::new(&config).assemble(&flat).unwrap();

        assert_eq!(
            polyline(&doc).attribute("points"),
            Some("80.0,300.0 360.0,300.0 920.0,300.0 920.0,520.0 80.0,520.0")
        );
    }

    #[test]
    fn test_no_segments_is_degenerate() {
        let config = ChartConfig::default();
        let err = ProfileChart::new(&config)
            .assemble(&model(Vec::new()))
            .unwrap_err();

        assert!(matches!(
            err,
            PaddockError::Projection(ProjectionError::DegenerateProfile)
        ));
    }
}
