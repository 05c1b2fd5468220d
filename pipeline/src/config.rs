//! Configuration of statement extraction, read from YAML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{repair::RepairMode, tabula_wrapper::TabulaExtractionRequest};

/// Extraction algorithm for Tabula to use.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TabulaExtractionMethod {
    Guess,
    Lattice,
    Stream,
}

impl TabulaExtractionMethod {
    pub fn to_tabula_extraction_method(self) -> tabula::ExtractionMethod {
        match self {
            TabulaExtractionMethod::Stream => tabula::ExtractionMethod::Basic,
            TabulaExtractionMethod::Guess => tabula::ExtractionMethod::Decide,
            TabulaExtractionMethod::Lattice => tabula::ExtractionMethod::Spreadsheet,
        }
    }
}

/// Controls how tables are extracted from a statement and repaired.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    pub method: TabulaExtractionMethod,
    /// Have Tabula guess the table area on each page.
    pub guess: bool,
    pub use_returns: bool,
    /// Pages to extract, all pages when absent.
    pub pages: Option<Vec<i32>>,
    pub repair: RepairMode,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            method: TabulaExtractionMethod::Stream,
            guess: true,
            use_returns: false,
            pages: None,
            repair: RepairMode::Full,
        }
    }
}

impl ExtractionConfig {
    /// Reads configuration from the YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            std::fs::File::open(path).with_context(|| format!("opening config {:?}", path))?;
        serde_yaml_ng::from_reader(file).with_context(|| format!("parsing config {:?}", path))
    }

    /// Builds the Tabula request for extracting tables from `pdf_path`.
    pub fn tabula_request(
        &self,
        pdf_path: &Path,
        password: Option<&str>,
    ) -> TabulaExtractionRequest {
        TabulaExtractionRequest {
            pdf_path: PathBuf::from(pdf_path),
            password: password.map(str::to_owned),
            pages: self.pages.clone(),
            guess: self.guess,
            use_returns: self.use_returns,
            method: self.method.to_tabula_extraction_method(),
        }
    }
}
