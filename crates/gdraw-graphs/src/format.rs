//! Output format selection from file names.

use gdraw_common::{GDrawError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Image formats the drawing backends can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics (bitmap backend).
    Png,
    /// JPEG (bitmap backend).
    Jpeg,
    /// Windows bitmap (bitmap backend).
    Bmp,
    /// Scalable Vector Graphics (SVG backend).
    Svg,
}

impl ImageFormat {
    /// Formats written when a file name has no extension.
    pub const DEFAULT_SET: [Self; 2] = [Self::Svg, Self::Png];

    /// Looks up a format by file extension, case-insensitively.
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            "svg" => Ok(Self::Svg),
            _ => Err(GDrawError::unsupported_format(extension)),
        }
    }

    /// Canonical file extension.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Svg => "svg",
        }
    }

    /// Whether the format is rasterised by the bitmap backend.
    pub const fn is_bitmap(self) -> bool {
        !matches!(self, Self::Svg)
    }

    /// Resolves the files to write for `path`.
    ///
    /// A path with an extension maps to exactly one target; a bare name expands
    /// to one target per format in [`ImageFormat::DEFAULT_SET`].
    pub fn targets(path: &Path) -> Result<Vec<(PathBuf, Self)>> {
        match path.extension() {
            Some(extension) => {
                let format = Self::from_extension(&extension.to_string_lossy())?;
                Ok(vec![(path.to_path_buf(), format)])
            }
            None => Ok(Self::DEFAULT_SET
                .iter()
                .map(|&format| (path.with_extension(format.extension()), format))
                .collect()),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(ImageFormat::from_extension("png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("PNG").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("jpeg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("svg").unwrap(), ImageFormat::Svg);

        let error = ImageFormat::from_extension("pdf").unwrap_err();
        assert!(matches!(error, GDrawError::UnsupportedFormat { ref extension } if extension == "pdf"));
    }

    #[test]
    fn test_targets_with_extension() {
        let targets = ImageFormat::targets(Path::new("out/graph.svg")).unwrap();
        assert_eq!(targets, vec![(PathBuf::from("out/graph.svg"), ImageFormat::Svg)]);

        assert!(ImageFormat::targets(Path::new("sample-graph.pdf")).is_err());
    }

    #[test]
    fn test_targets_without_extension() {
        let targets = ImageFormat::targets(Path::new("out/graph")).unwrap();
        assert_eq!(
            targets,
            vec![
                (PathBuf::from("out/graph.svg"), ImageFormat::Svg),
                (PathBuf::from("out/graph.png"), ImageFormat::Png),
            ]
        );
    }

    #[test]
    fn test_is_bitmap() {
        assert!(ImageFormat::Png.is_bitmap());
        assert!(ImageFormat::Bmp.is_bitmap());
        assert!(!ImageFormat::Svg.is_bitmap());
    }
}
