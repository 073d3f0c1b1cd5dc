//! Shape and timing fixtures shared by the pathmorph tests, benches and demos.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Fixture name -> path relative to the workspace `fixtures/` directory.
type Entries = BTreeMap<String, String>;

#[derive(Debug, Deserialize)]
struct Manifest {
    shapes: Entries,
    configs: Entries,
}

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures manifest should parse")
});

fn read(entries: &Entries, kind: &str, name: &str) -> Result<String> {
    let rel = entries
        .get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))?;
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../../fixtures")
        .join(rel);
    std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

/// Polygon outlines (`{ "points": [{ "x", "y" }, ..] }`).
pub mod shapes {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.shapes.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        read(&MANIFEST.shapes, "shape", name)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        serde_json::from_str(&json(name)?).with_context(|| format!("parsing shape '{name}'"))
    }
}

/// Timing configurations.
pub mod configs {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.configs.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        read(&MANIFEST.configs, "config", name)
    }
}
