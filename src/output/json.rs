//! JSON document output

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};
use crate::tree::TreeDocument;

const INDENT: &[u8] = b"    ";

fn write_document<W: io::Write>(document: &TreeDocument, writer: W) -> io::Result<()> {
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    Ok(())
}

/// Serialize a document to its canonical text: 4-space indentation, keys in
/// declaration order, no trailing newline.
pub fn to_json_string(document: &TreeDocument) -> Result<String> {
    let buffer_error = |source: io::Error| Error::Write {
        target: String::from("in-memory buffer"),
        source,
    };
    let mut buf = Vec::new();
    write_document(document, &mut buf).map_err(buffer_error)?;
    String::from_utf8(buf)
        .map_err(|source| buffer_error(io::Error::new(io::ErrorKind::InvalidData, source)))
}

/// Write the document to `path`, creating or truncating the file.
/// The handle is released on every exit path.
pub fn write_json(document: &TreeDocument, path: &Path) -> Result<()> {
    let write_error = |source: io::Error| Error::Write {
        target: path.display().to_string(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut writer = io::BufWriter::new(file);
    write_document(document, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)
}
