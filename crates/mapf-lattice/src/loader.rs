//! CSV terrain loader.
//!
//! # CSV format
//!
//! Headerless, one row per y index (row 0 is `y_min`), one column per x
//! index (column 0 is `x_min`).  Each field is a traversability value;
//! `1` is traversable, anything else is a wall.
//!
//! ```csv
//! 1,1,1,1
//! 1,0,0,1
//! 1,1,1,1
//! ```
//!
//! All rows must have the same number of fields.

use std::io::Read;
use std::path::Path;

use mapf_core::Bounds;

use crate::{LatticeError, TraversabilityGrid};

/// Load a [`TraversabilityGrid`] spanning `bounds` from a CSV file.
pub fn load_terrain_csv(path: &Path, bounds: Bounds) -> Result<TraversabilityGrid, LatticeError> {
    let file = std::fs::File::open(path).map_err(LatticeError::Io)?;
    load_terrain_reader(file, bounds)
}

/// Like [`load_terrain_csv`] but accepts any `Read` source.
pub fn load_terrain_reader<R: Read>(
    reader: R,
    bounds: Bounds,
) -> Result<TraversabilityGrid, LatticeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut values: Vec<f32> = Vec::new();
    let mut nx: Option<usize> = None;
    let mut ny = 0usize;

    for result in csv_reader.deserialize::<Vec<f32>>() {
        let row = result.map_err(|e| LatticeError::Parse(e.to_string()))?;
        match nx {
            None => nx = Some(row.len()),
            Some(n) if n != row.len() => {
                return Err(LatticeError::Parse(format!(
                    "row {ny} has {} fields, expected {n}",
                    row.len()
                )));
            }
            Some(_) => {}
        }
        values.extend(row);
        ny += 1;
    }

    let nx = nx.ok_or_else(|| LatticeError::Parse("terrain CSV has no rows".into()))?;
    TraversabilityGrid::new(bounds, nx, ny, values)
}
