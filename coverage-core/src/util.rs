//! YAML files of configurations.
use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

/// Reads a value from a YAML file.
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {:?}", path))?;
    let rdr = BufReader::new(file);
    let value =
        serde_yaml::from_reader(rdr).with_context(|| format!("failed to parse {:?}", path))?;
    Ok(value)
}

/// Writes a value to a YAML file, replacing its contents.
pub fn save_yaml<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("failed to create {:?}", path))?;
    let wtr = BufWriter::new(file);
    serde_yaml::to_writer(wtr, value)?;
    Ok(())
}
