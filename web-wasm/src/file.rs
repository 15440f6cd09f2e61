//! Browser file handle

use vtu_sgpa_common::{Error, FileHandle, Result};
use web_sys::FileList;

/// A user-selected `File`, with the bits the controller looks at copied out
#[derive(Clone, Debug)]
pub struct PdfFile {
    name: String,
    mime: String,
    raw: web_sys::File,
}

impl From<web_sys::File> for PdfFile {
    fn from(raw: web_sys::File) -> Self {
        Self {
            name: raw.name(),
            mime: raw.type_(),
            raw,
        }
    }
}

impl FileHandle for PdfFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime
    }
}

impl PdfFile {
    /// Read the whole file; this is one of the two suspension points of a submit
    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        let file = gloo::file::File::from(self.raw.clone());
        gloo::file::futures::read_as_bytes(&file)
            .await
            .map_err(|e| Error::FileRead(e.to_string()))
    }
}

pub fn files_from_list(list: &FileList) -> Vec<PdfFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(PdfFile::from)
        .collect()
}
