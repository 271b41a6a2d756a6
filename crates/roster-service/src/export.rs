use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use fastrace::trace;
use roster_types::User;
use serde::Serialize;

use crate::ServiceError;

/// Writes users as a pretty-printed JSON array (2-space indent, UTF-8,
/// non-ASCII left unescaped), replacing any existing file.
#[trace]
pub fn write_users_to_json<U: Serialize>(path: &Path, users: &[U]) -> Result<(), ServiceError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, users)?;
    writer.flush()?;
    Ok(())
}

pub fn read_users_from_json(path: &Path) -> Result<Vec<User>, ServiceError> {
    let file = File::open(path)?;
    let users = serde_json::from_reader(BufReader::new(file))?;
    Ok(users)
}
