//! Model files and the output document.
//!
//! A model file is a JSON object with an `elements` list of
//! [`ModelElement`] records. The output document pairs the element views with
//! the colors a host would have painted.

use std::{collections::BTreeMap, fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use loadpath::{GraphView, LoadpathError};
use loadpath_core::{
    color::Color,
    element::{ElementId, ModelElement},
    host::ColorSink,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelFile {
    elements: Vec<ModelElement>,
}

/// Reads the elements of a JSON model file.
///
/// # Errors
///
/// Returns [`LoadpathError::Io`] if the file cannot be read and
/// [`LoadpathError::Model`] if it is not a valid model.
pub fn load_model(path: impl AsRef<Path>) -> Result<Vec<ModelElement>, LoadpathError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let model: ModelFile = serde_json::from_str(&content)
        .map_err(|err| LoadpathError::Model(format!("{}: {err}", path.display())))?;

    debug!(elements_count = model.elements.len(); "Model loaded");
    Ok(model.elements)
}

/// Collects model colors as hex strings, keyed by element.
#[derive(Debug, Default)]
pub struct ColorRecorder {
    colors: BTreeMap<ElementId, String>,
}

impl ColorRecorder {
    pub fn colors(&self) -> &BTreeMap<ElementId, String> {
        &self.colors
    }
}

impl ColorSink for ColorRecorder {
    fn override_color(&mut self, id: ElementId, color: Color) {
        self.colors.insert(id, color.to_hex());
    }
}

/// The JSON document written for a build.
#[derive(Debug, Serialize)]
pub struct GraphDocument<'a> {
    elements: &'a GraphView,
    colors: &'a BTreeMap<ElementId, String>,
}

impl<'a> GraphDocument<'a> {
    pub fn new(elements: &'a GraphView, recorder: &'a ColorRecorder) -> Self {
        Self {
            elements,
            colors: recorder.colors(),
        }
    }

    pub fn to_json(&self) -> Result<String, LoadpathError> {
        serde_json::to_string_pretty(self).map_err(|err| LoadpathError::Export(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::NamedTempFile;

    use loadpath_core::host::Element;

    use super::*;

    #[test]
    fn test_load_model() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"{ "elements": [
                { "id": 1, "category": "Floors", "solids": [{ "min": [0, 0, 0], "max": [4, 4, 0.2] }] },
                { "id": 2, "category": "Rooms" }
            ] }"#,
        )
        .unwrap();

        let elements = load_model(file.path()).unwrap();

        assert_eq!(elements.len(), 2);
        assert!(elements[0].has_geometry());
        assert!(!elements[1].has_geometry());
    }

    #[test]
    fn test_inverted_solid_is_a_model_error() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"{ "elements": [{ "id": 1, "category": "Floors", "solids": [{ "min": [0, 0, 1], "max": [1, 1, 0] }] }] }"#,
        )
        .unwrap();

        assert!(matches!(load_model(file.path()), Err(LoadpathError::Model(_))));
    }

    #[test]
    fn test_missing_model_is_io_error() {
        assert!(matches!(load_model("no/such/model.json"), Err(LoadpathError::Io(_))));
    }

    #[test]
    fn test_document_shape() {
        let mut recorder = ColorRecorder::default();
        recorder.override_color(ElementId::new(4), Color::from_rgb8(255, 0, 0));

        let view = GraphView::default();
        let json = GraphDocument::new(&view, &recorder).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["elements"].as_array().unwrap().is_empty());
        assert_eq!(value["colors"]["4"], "#FF0000");
    }
}
