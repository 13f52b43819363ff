//! CLI logic for the Paddock circuit tool.
//!
//! This module contains the core CLI logic: it loads one circuit record and
//! writes the requested artifacts next to each other in the output directory.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::info;

use paddock::{Converter, PaddockError, write_artifact};

/// Run the Paddock CLI application
///
/// Every requested artifact is rendered before the first one is written, so
/// a record that fails for any artifact leaves the output directory as it
/// was.
///
/// # Errors
///
/// Returns `PaddockError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed records and missing fields
/// - Profiles that cannot be drawn
pub fn run(args: &Args) -> Result<(), PaddockError> {
    let kinds = args.selected_kinds();
    info!(
        input_path = args.input,
        out_dir = args.out_dir,
        artifacts = kinds.len();
        "Processing circuit record"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.input)?;

    let converter = Converter::new(app_config);
    let record = converter.load(&source)?;
    let rendered = kinds
        .into_iter()
        .map(|kind| -> Result<_, PaddockError> { Ok((kind, converter.render(kind, &record)?)) })
        .collect::<Result<Vec<_>, PaddockError>>()?;

    let out_dir = Path::new(&args.out_dir);
    for (kind, bytes) in rendered {
        let path = out_dir.join(kind.default_file_name());
        write_artifact(&path, &bytes)?;
        info!(kind:%, output_file = path.display().to_string(); "Artifact exported successfully");
    }

    Ok(())
}
