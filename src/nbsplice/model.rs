use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const CELLS_KEY: &str = "cells";

/// One unit of notebook content. Opaque apart from its `metadata.id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(Value);

impl Cell {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The cell's `metadata.id`, if it has a string one.
    pub fn id(&self) -> Option<&str> {
        self.0.pointer("/metadata/id").and_then(Value::as_str)
    }
}

/// A notebook document: a `cells` array plus any other top-level fields.
///
/// Fields other than `cells` are kept verbatim and in their original order.
/// The cell list is held separately so it can be replaced without touching
/// the rest, and is written back at the position it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    // `cells` stays in this map as a placeholder to remember its position
    fields: Map<String, Value>,
    cells: Vec<Cell>,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        let mut fields = Map::new();
        fields.insert(CELLS_KEY.to_string(), Value::Null);
        Self { fields, cells }
    }

    /// Builds a notebook from a parsed JSON value.
    ///
    /// Fails when the value is not an object or has no `cells` array.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(mut fields) = value else {
            return Err("top-level value is not an object".to_string());
        };
        let cells = match fields.get_mut(CELLS_KEY).map(Value::take) {
            Some(Value::Array(items)) => items.into_iter().map(Cell::new).collect(),
            Some(_) => return Err("\"cells\" is not an array".to_string()),
            None => return Err("missing \"cells\" field".to_string()),
        };
        Ok(Self { fields, cells })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn set_cells(&mut self, cells: Vec<Cell>) {
        self.cells = cells;
    }

    /// A top-level field other than `cells`.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn field(&self, key: &str) -> Option<&Value> {
        if key == CELLS_KEY {
            return None;
        }
        self.fields.get(key)
    }
}

impl Serialize for Notebook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            if key == CELLS_KEY {
                map.serialize_entry(key, &self.cells)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Notebook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Notebook::from_value(value).map_err(de::Error::custom)
    }
}

// --- Test Fixtures ---

/// Builds code cells whose `metadata.id` values are the given ids.
#[cfg(any(test, feature = "test_utils"))]
pub fn test_cells(ids: &[&str]) -> Vec<Cell> {
    ids.iter()
        .map(|id| {
            Cell::new(serde_json::json!({
                "cell_type": "code",
                "metadata": { "id": id },
                "source": [format!("print('{}')", id)],
                "outputs": [],
            }))
        })
        .collect()
}

/// The ids of `cells`, in order. Cells without an id show up as `"?"`.
#[cfg(any(test, feature = "test_utils"))]
pub fn cell_ids(cells: &[Cell]) -> Vec<&str> {
    cells.iter().map(|c| c.id().unwrap_or("?")).collect()
}
