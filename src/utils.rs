use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{ConvertError, ConvertErrorKind, IOError, Result};

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConvertError::new(ConvertErrorKind::IO(
            IOError::FileNotFound(path.display().to_string()),
        )),
        std::io::ErrorKind::PermissionDenied => ConvertError::new(ConvertErrorKind::IO(
            IOError::PermissionDenied(path.display().to_string()),
        )),
        _ => ConvertError::new(ConvertErrorKind::IO(IOError::ReadError(e.to_string()))),
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => ConvertError::new(ConvertErrorKind::IO(
            IOError::PermissionDenied(path.display().to_string()),
        )),
        _ => ConvertError::new(ConvertErrorKind::IO(IOError::WriteError(e.to_string()))),
    })
}

/// Document identifier for an input path: the file name with every
/// extension stripped, so `corpus.tei.xml` becomes `corpus`.
pub fn document_id(path: &Path) -> String {
    let mut stem = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    loop {
        let p = Path::new(&stem);
        match (p.file_stem(), p.extension()) {
            (Some(s), Some(_)) => stem = s.to_string_lossy().into_owned(),
            _ => break,
        }
    }
    stem
}

/// Output file path for a converted document.
pub fn output_path(out_dir: &Path, doc_id: &str, extension: &str) -> PathBuf {
    out_dir.join(format!("{}.{}", doc_id, extension))
}
