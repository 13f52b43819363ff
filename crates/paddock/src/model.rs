//! Per-artifact views of a circuit record.
//!
//! Each model gathers exactly the fields one artifact needs. Extraction fails
//! with [`SourceError::MissingField`] on the first absent required field;
//! repeated fields (references, media, standings) are empty when absent.

use paddock_core::kml::Coordinate;
use paddock_source::{Fields, Record, SourceError};

/// Fields of the elevation chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileModel {
    pub name: String,
    pub locality: String,
    pub origin_altitude: f64,
    /// `(length, altitude)` per track segment, in record order.
    pub segments: Vec<(f64, f64)>,
}

impl ProfileModel {
    pub fn extract(record: &Record) -> Result<Self, SourceError> {
        let name = record.scalar("nombre")?.to_string();
        let locality = record.scalar("localidad")?.to_string();
        let segments = record
            .list("tramo")
            .iter()
            .map(|tramo| -> Result<_, SourceError> {
                Ok((
                    tramo.number("distancia")?,
                    tramo.number("coordenadas/altitudGeo")?,
                ))
            })
            .collect::<Result<_, SourceError>>()?;

        Ok(Self {
            name,
            locality,
            origin_altitude: record.number("coordenadasOrigen/altitudGeo")?,
            segments,
        })
    }
}

/// Fields of the KML overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackModel {
    pub name: String,
    pub locality: String,
    pub country: String,
    /// Finish line position.
    pub origin: Coordinate,
    /// End point of every segment, in record order.
    pub path: Vec<Coordinate>,
}

impl TrackModel {
    pub fn extract(record: &Record) -> Result<Self, SourceError> {
        let name = record.scalar("nombre")?.to_string();
        let locality = record.scalar("localidad")?.to_string();
        let country = record.scalar("pais")?.to_string();
        let origin = Coordinate::new(
            record.number("coordenadasOrigen/longitudGeo")?,
            record.number("coordenadasOrigen/latitudGeo")?,
        );
        let path = record
            .list("tramo")
            .iter()
            .map(|tramo| -> Result<_, SourceError> {
                Ok(Coordinate::new(
                    tramo.number("coordenadas/longitudGeo")?,
                    tramo.number("coordenadas/latitudGeo")?,
                ))
            })
            .collect::<Result<_, SourceError>>()?;

        Ok(Self {
            name,
            locality,
            country,
            origin,
            path,
        })
    }
}

/// A value with optional units, kept as written in the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measure {
    pub value: String,
    pub units: Option<String>,
}

impl Measure {
    fn extract(record: &Record, path: &str) -> Result<Self, SourceError> {
        let value = record.scalar(path)?;
        // Units come from the element that supplied the value.
        let units = record
            .list(path)
            .into_iter()
            .find(|entry| entry.text() == Some(value))
            .and_then(|entry| entry.element().attribute("unidades"))
            .filter(|units| !units.is_empty())
            .map(str::to_string);

        Ok(Self {
            value: value.to_string(),
            units,
        })
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.units {
            Some(units) => write!(f, "{} {units}", self.value),
            None => f.write_str(&self.value),
        }
    }
}

/// Origin coordinates as written in the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoText {
    pub longitude: String,
    pub latitude: String,
    pub altitude: String,
}

/// One row of the world standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub position: String,
    pub rider: String,
    pub points: String,
}

/// Fields of the info page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoModel {
    pub name: String,
    pub length: Measure,
    pub width: Measure,
    pub date: String,
    pub start_time: String,
    pub laps: String,
    pub locality: String,
    pub country: String,
    pub sponsor: String,
    pub references: Vec<String>,
    pub photos: Vec<String>,
    pub videos: Vec<String>,
    pub origin: GeoText,
    pub winner: String,
    pub race_time: String,
    pub standings: Vec<Standing>,
}

impl InfoModel {
    pub fn extract(record: &Record) -> Result<Self, SourceError> {
        let text = |path| record.scalar(path).map(str::to_string);
        let texts = |path| {
            record
                .texts(path)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        let standings = record
            .list("clasificacionMundial/pilotoClasificado")
            .iter()
            .map(|entry| -> Result<_, SourceError> {
                Ok(Standing {
                    position: entry.scalar("@posicion")?.to_string(),
                    rider: entry.scalar("nombrePilotoClasificado")?.to_string(),
                    points: entry.scalar("puntosPiloto")?.to_string(),
                })
            })
            .collect::<Result<_, SourceError>>()?;

        Ok(Self {
            name: text("nombre")?,
            length: Measure::extract(record, "longitud")?,
            width: Measure::extract(record, "anchura")?,
            date: text("fecha")?,
            start_time: text("horaInicio")?,
            laps: text("numeroVueltas")?,
            locality: text("localidad")?,
            country: text("pais")?,
            sponsor: text("patrocinadorPrincipal")?,
            references: texts("referencias/referencia"),
            photos: texts("fotos/foto"),
            videos: texts("videos/video"),
            origin: GeoText {
                longitude: text("coordenadasOrigen/longitudGeo")?,
                latitude: text("coordenadasOrigen/latitudGeo")?,
                altitude: text("coordenadasOrigen/altitudGeo")?,
            },
            winner: text("vencedor/nombrePiloto")?,
            race_time: text("vencedor/tiempoCarrera")?,
            standings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"<circuito xmlns="http://www.uniovi.es">
        <nombre>Sepang</nombre>
        <longitud unidades="m">5543</longitud>
        <anchura>25</anchura>
        <fecha>2025-10-26</fecha>
        <horaInicio>15:00</horaInicio>
        <numeroVueltas>20</numeroVueltas>
        <localidad>Sepang</localidad>
        <pais>Malasia</pais>
        <patrocinadorPrincipal>Petronas</patrocinadorPrincipal>
        <coordenadasOrigen>
            <longitudGeo>101.738</longitudGeo>
            <latitudGeo>2.7606</latitudGeo>
            <altitudGeo>60</altitudGeo>
        </coordenadasOrigen>
        <tramo>
            <distancia>100</distancia>
            <coordenadas>
                <longitudGeo>101.739</longitudGeo>
                <latitudGeo>2.761</latitudGeo>
                <altitudGeo>62</altitudGeo>
            </coordenadas>
        </tramo>
        <vencedor>
            <nombrePiloto>Marc Márquez</nombrePiloto>
            <tiempoCarrera>39:38.458</tiempoCarrera>
        </vencedor>
    </circuito>"#;

    #[test]
    fn test_profile_model() {
        let record = Record::parse(RECORD).unwrap();
        let model = ProfileModel::extract(&record).unwrap();

        assert_eq!(model.name, "Sepang");
        assert_eq!(model.origin_altitude, 60.0);
        assert_eq!(model.segments, [(100.0, 62.0)]);
    }

    #[test]
    fn test_track_model() {
        let record = Record::parse(RECORD).unwrap();
        let model = TrackModel::extract(&record).unwrap();

        assert_eq!(model.origin, Coordinate::new(101.738, 2.7606));
        assert_eq!(model.path, [Coordinate::new(101.739, 2.761)]);
        assert_eq!(model.country, "Malasia");
    }

    #[test]
    fn test_info_model_optional_parts() {
        let record = Record::parse(RECORD).unwrap();
        let model = InfoModel::extract(&record).unwrap();

        assert_eq!(model.length.to_string(), "5543 m");
        assert_eq!(model.width.to_string(), "25");
        assert!(model.references.is_empty());
        assert!(model.photos.is_empty());
        assert!(model.standings.is_empty());
        assert_eq!(model.winner, "Marc Márquez");
    }

    #[test]
    fn test_units_belong_to_the_measured_element() {
        let record = Record::parse(&RECORD.replace(
            "<anchura>25</anchura>",
            "<anchura>25</anchura><notas><anchura unidades=\"km\">9</anchura></notas>",
        ))
        .unwrap();
        let model = InfoModel::extract(&record).unwrap();

        assert_eq!(model.width.value, "25");
        assert_eq!(model.width.units, None);
        assert_eq!(model.length.to_string(), "5543 m");
    }

    #[test]
    fn test_missing_name() {
        let record = Record::parse(&RECORD.replace("<nombre>Sepang</nombre>", "")).unwrap();

        for result in [
            InfoModel::extract(&record).map(|_| ()),
            ProfileModel::extract(&record).map(|_| ()),
            TrackModel::extract(&record).map(|_| ()),
        ] {
            assert_eq!(result, Err(SourceError::MissingField("nombre".to_string())));
        }
    }
}
