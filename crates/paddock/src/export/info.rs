//! HTML circuit information page.

use log::debug;

use paddock_core::{
    html::{HtmlPage, Link, RESPONSIVE_IMAGE_STYLE},
    markup::{Document, ElementId},
};

use crate::{
    PaddockError,
    config::PageConfig,
    export::{Assembler, caption::caption},
    model::InfoModel,
};

const VIDEO_MIME: &str = "video/mp4";
const VIDEO_FALLBACK: &str = "Tu navegador no soporta el elemento video.";

/// Circuit information page: static chrome followed by data sections.
///
/// Sections, in order: title, general information, origin coordinates,
/// references (only when present), multimedia (only when there is at least
/// one photo or video) and results.
#[derive(Debug, Clone, Copy)]
pub struct InfoPage<'a> {
    config: &'a PageConfig,
}

impl<'a> InfoPage<'a> {
    pub fn new(config: &'a PageConfig) -> Self {
        Self { config }
    }

    fn head(&self, page: &mut HtmlPage) -> Result<(), PaddockError> {
        let config = self.config;
        page.meta_charset(config.charset())?;
        page.meta("author", config.author())?;
        page.meta("description", config.description())?;
        page.meta("keywords", config.keywords())?;
        page.meta("viewport", config.viewport())?;
        page.title(config.title())?;
        page.link("icon", Some("image/x-icon"), config.icon())?;
        for stylesheet in config.stylesheets() {
            page.link("stylesheet", Some("text/css"), stylesheet)?;
        }
        Ok(())
    }

    fn chrome(&self, page: &mut HtmlPage) -> Result<(), PaddockError> {
        let config = self.config;
        let body = page.body();

        let header = page.element(body, "header")?;
        let h1 = page.element(header, "h1")?;
        page.anchor(
            h1,
            &Link::new(config.home(), config.site_name()).with_title(config.home_title()),
        )?;
        let nav = page.element(header, "nav")?;
        for entry in config.navigation() {
            let mut link = Link::new(&entry.href, &entry.text).with_title(&entry.title);
            if entry.active {
                link = link.with_class("active");
            }
            page.anchor(nav, &link)?;
        }

        let trail = page.paragraph(body, "Estás en: ")?;
        page.anchor(trail, &Link::new(config.home(), "Inicio"))?;
        page.text_element(trail, "span", &format!("> {}", config.breadcrumb()))?;
        Ok(())
    }

    fn section(
        &self,
        page: &mut HtmlPage,
        main: ElementId,
        title: &str,
    ) -> Result<ElementId, PaddockError> {
        let section = page.element(main, "section")?;
        page.heading(section, 2, title)?;
        Ok(section)
    }

    fn multimedia(
        &self,
        page: &mut HtmlPage,
        main: ElementId,
        model: &InfoModel,
    ) -> Result<(), PaddockError> {
        if model.photos.is_empty() && model.videos.is_empty() {
            return Ok(());
        }
        let section = self.section(page, main, "Multimedia")?;

        if !model.photos.is_empty() {
            page.heading(section, 3, "Fotografías")?;
            for photo in &model.photos {
                let label = caption(photo);
                let figure = page.figure(section)?;
                page.image(
                    figure,
                    &self.config.media_path(photo),
                    &format!("Fotografía del circuito: {label}"),
                    Some(RESPONSIVE_IMAGE_STYLE),
                )?;
                page.figcaption(figure, &label)?;
            }
        }

        if !model.videos.is_empty() {
            page.heading(section, 3, "Videos")?;
            for video in &model.videos {
                let figure = page.figure(section)?;
                page.video(
                    figure,
                    &self.config.media_path(video),
                    VIDEO_MIME,
                    VIDEO_FALLBACK,
                )?;
                page.figcaption(figure, &format!("Video del circuito: {}", caption(video)))?;
            }
        }
        Ok(())
    }
}

impl Assembler for InfoPage<'_> {
    type Model = InfoModel;

    fn assemble(&self, model: &InfoModel) -> Result<Document, PaddockError> {
        debug!(
            name = model.name,
            references = model.references.len(),
            photos = model.photos.len(),
            videos = model.videos.len(),
            standings = model.standings.len();
            "Assembling info page"
        );

        let mut page = HtmlPage::new(self.config.lang())?;
        self.head(&mut page)?;
        self.chrome(&mut page)?;
        let main = page.element(page.body(), "main")?;

        let location = format!("{}, {}", model.locality, model.country);

        let section = self.section(
            &mut page,
            main,
            &format!("Información del circuito - {}", model.name),
        )?;
        page.paragraph(section, &format!("Circuito de {location}"))?;

        let section = self.section(&mut page, main, "Información General")?;
        for line in [
            format!("Localización: {location}"),
            format!("Longitud: {}", model.length),
            format!("Anchura: {}", model.width),
            format!("Fecha de la carrera: {}", model.date),
            format!("Hora de inicio: {}", model.start_time),
            format!("Número de vueltas: {}", model.laps),
            format!("Patrocinador principal: {}", model.sponsor),
        ] {
            page.paragraph(section, &line)?;
        }

        let section = self.section(&mut page, main, "Coordenadas de Origen")?;
        page.paragraph(section, &format!("Longitud: {}°", model.origin.longitude))?;
        page.paragraph(section, &format!("Latitud: {}°", model.origin.latitude))?;
        page.paragraph(section, &format!("Altitud: {} metros", model.origin.altitude))?;

        if !model.references.is_empty() {
            let section = self.section(&mut page, main, "Referencias")?;
            let list = page.element(section, "ul")?;
            for reference in &model.references {
                let item = page.element(list, "li")?;
                page.anchor(item, &Link::new(reference, reference))?;
            }
        }

        self.multimedia(&mut page, main, model)?;

        let section = self.section(&mut page, main, "Resultados")?;
        page.paragraph(section, &format!("Vencedor: {}", model.winner))?;
        page.paragraph(section, &format!("Tiempo de carrera: {}", model.race_time))?;
        if !model.standings.is_empty() {
            page.heading(section, 3, "Clasificación Mundial")?;
            page.definition_list(
                section,
                model.standings.iter().map(|s| {
                    (
                        format!("Posición {}", s.position),
                        format!("{} - {} puntos", s.rider, s.points),
                    )
                }),
            )?;
        }

        Ok(page.into_document())
    }
}
