// internal modules
use crate::error::Result;
use crate::table::NuclideTable;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::OnceLock;

// Only ever deserialise the standard data once on first use
static STANDARD: OnceLock<NuclideTable> = OnceLock::new();

pub(crate) fn standard() -> &'static NuclideTable {
    STANDARD.get_or_init(|| {
        NuclideTable::from_json_str(include_str!("../data/standard.json"))
            .expect("compiled-in nuclide table is invalid")
    })
}

/// Read a nuclide table from a JSON file
///
/// The `path` takes anything that can be turned into a `Path` reference, such
/// as a [&str], [String], [Path], etc...
///
/// ```rust, no_run
/// # use isotops_table::read_json;
/// let table = read_json("path/to/table.json").unwrap();
/// ```
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<NuclideTable> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Read a nuclide table from the compact binary form
///
/// Files are produced by [write_binary()]. The table is validated exactly as
/// it would be for JSON input.
pub fn read_binary<P: AsRef<Path>>(path: P) -> Result<NuclideTable> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}

/// Write a nuclide table in the compact binary form
pub fn write_binary<P: AsRef<Path>>(table: &NuclideTable, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}
