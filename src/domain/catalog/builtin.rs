//! The compiled-in question catalog.
//!
//! Catalog data lives in an embedded YAML asset and is parsed exactly
//! once, at first use. The asset is part of the binary; there is no
//! runtime path for loading external catalogs.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use super::{Catalog, Section, WelcomeCopy};
use crate::domain::foundation::ValidationError;

const RISK_ASSESSMENT_YAML: &str = include_str!("builtin/risk_assessment.yaml");

static RISK_ASSESSMENT: Lazy<Arc<Catalog>> = Lazy::new(|| {
    Arc::new(
        parse_catalog(RISK_ASSESSMENT_YAML)
            .expect("embedded risk assessment catalog must be valid"),
    )
});

/// Errors raised while parsing an embedded catalog asset.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Catalog asset is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Catalog asset violates an invariant: {0}")]
    Invalid(#[from] ValidationError),
}

/// Raw document shape of a catalog asset.
#[derive(Debug, Deserialize)]
struct CatalogDoc {
    title: String,
    #[serde(default)]
    welcome: Option<WelcomeCopy>,
    sections: Vec<Section>,
}

fn parse_catalog(yaml: &str) -> Result<Catalog, CatalogLoadError> {
    let doc: CatalogDoc = serde_yaml::from_str(yaml)?;
    Ok(Catalog::new(doc.title, doc.welcome, doc.sections)?)
}

/// Returns the built-in risk assessment system evaluation catalog.
pub fn risk_assessment() -> Arc<Catalog> {
    Arc::clone(&RISK_ASSESSMENT)
}
