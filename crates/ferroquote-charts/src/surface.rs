use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::ChartError;

/// Where a rendered chart is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSurface {
    /// Static SVG drawn with plotters.
    SvgFile(PathBuf),
    /// Plotly figure document, opened by plotly.js in a browser or notebook.
    PlotlyJson(PathBuf),
}

impl ChartSurface {
    /// Pick the surface from the file extension (`.svg` or `.json`).
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, ChartError> {
        let path = path.into();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => Ok(Self::SvgFile(path)),
            Some("json") => Ok(Self::PlotlyJson(path)),
            _ => Err(ChartError::UnsupportedSurface {
                path: path.display().to_string(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::SvgFile(path) | Self::PlotlyJson(path) => path,
        }
    }
}

pub(crate) fn write_svg(path: &Path, svg: &str) -> Result<(), ChartError> {
    fs::write(path, svg)?;
    info!(path = %path.display(), "wrote svg chart");
    Ok(())
}

pub(crate) fn write_plotly<T: Serialize>(path: &Path, figure: &T) -> Result<(), ChartError> {
    let payload = serde_json::to_string_pretty(figure)?;
    fs::write(path, payload)?;
    info!(path = %path.display(), "wrote plotly figure");
    Ok(())
}
