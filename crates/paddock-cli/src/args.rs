//! Command-line argument definitions for the Paddock CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input record, the artifacts to
//! produce, where to write them, the configuration file and the logging
//! verbosity.

use clap::Parser;

use paddock::ArtifactKind;

/// Command-line arguments for the Paddock circuit tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input circuit record
    #[arg(default_value = "circuitoEsquema.xml")]
    pub input: String,

    /// Artifacts to produce (chart, info, track); all when omitted
    #[arg(short, long = "kind")]
    pub kinds: Vec<ArtifactKind>,

    /// Directory the artifacts are written to
    #[arg(short = 'd', long, default_value = ".")]
    pub out_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The requested artifacts in generation order, without repeats.
    pub fn selected_kinds(&self) -> Vec<ArtifactKind> {
        if self.kinds.is_empty() {
            return ArtifactKind::ALL.to_vec();
        }
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| self.kinds.contains(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["paddock"]);

        assert_eq!(args.input, "circuitoEsquema.xml");
        assert_eq!(args.out_dir, ".");
        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
        assert_eq!(args.selected_kinds(), ArtifactKind::ALL);
    }

    #[test]
    fn test_selected_kinds_follow_generation_order() {
        let args = Args::parse_from(["paddock", "sepang.xml", "-k", "kml", "--kind", "chart", "-k", "track"]);

        assert_eq!(args.input, "sepang.xml");
        assert_eq!(
            args.selected_kinds(),
            [ArtifactKind::Chart, ArtifactKind::Track]
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Args::try_parse_from(["paddock", "-k", "pdf"]).is_err());
    }
}
