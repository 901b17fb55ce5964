use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::types::Result;

/// Build a ZIP archive in memory from `(file name, bytes)` entries.
///
/// Entries are written in the order given.
pub fn build_zip<N, B>(entries: impl IntoIterator<Item = (N, B)>) -> Result<Vec<u8>>
where
    N: Into<String>,
    B: AsRef<[u8]>,
{
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, bytes) in entries {
        let name: String = name.into();
        writer.start_file(name, options)?;
        writer.write_all(bytes.as_ref())?;
    }

    Ok(writer.finish()?.into_inner())
}
