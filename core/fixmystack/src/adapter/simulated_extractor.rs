//! 添付ファイルからの擬似抽出
//!
//! テキスト系はそのまま読む。画像・音声・文書は本物の OCR / 文字起こしの代わりに、
//! 判定ルールに当たる定型のプレースホルダ文を返す。

use crate::domain::FileKind;
use crate::ports::outbound::TextExtractor;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;
use std::sync::Arc;

const SIMULATED_OCR: &str = "[Simulated OCR] detected text:\nTypeError: Cannot read property 'map' of undefined\n    at Component (App.js:12)\n\n(This is a simulated extraction for the demo)";
const SIMULATED_TRANSCRIPTION: &str = "[Simulated Transcription]: \"I'm trying to run my Node server but getting an EADDRINUSE error on port 3000.\"";
const SIMULATED_DOCUMENT: &str = "[Simulated Document Extraction]:\njava.lang.NullPointerException\n    at com.example.MyClass.method(MyClass.java:10)";

pub struct SimulatedExtractor {
    fs: Arc<dyn FileSystem>,
}

impl SimulatedExtractor {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl TextExtractor for SimulatedExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, Error> {
        let meta = self.fs.metadata(path)?;
        if !meta.is_file() {
            return Err(Error::invalid_argument(format!(
                "'{}' is not a regular file",
                path.display()
            )));
        }

        let kind = FileKind::from_path(path);
        if kind == FileKind::Text {
            return self.fs.read_to_string(path);
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let body = match kind {
            FileKind::Image => SIMULATED_OCR,
            FileKind::Audio => SIMULATED_TRANSCRIPTION,
            FileKind::Document | FileKind::Text => SIMULATED_DOCUMENT,
        };
        Ok(format!("[System: Attached file \"{}\"]\n{}", name, body))
    }
}
