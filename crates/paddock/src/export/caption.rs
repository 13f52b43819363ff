//! Human-readable captions derived from media file paths.

/// Derives a caption from a file path.
///
/// Directories (`/` or `\` separated) and the last extension are dropped,
/// `_` and `-` become spaces, and every word is title-cased: the first
/// letter of each run of letters is upper case, the rest lower case.
///
/// ```
/// use paddock::export::caption::caption;
///
/// assert_eq!(caption("multimedia/curva_final.jpg"), "Curva Final");
/// assert_eq!(caption(r"media\VUELTA-rapida.mp4"), "Vuelta Rapida");
/// assert_eq!(caption("tribuna_2024b.png"), "Tribuna 2024B");
/// ```
pub fn caption(path: &str) -> String {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);

    let mut out = String::with_capacity(stem.len());
    let mut in_word = false;
    for c in stem.chars() {
        let c = if matches!(c, '_' | '-') { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
