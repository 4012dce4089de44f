//! 添付ファイルの種別（拡張子で判定）
//!
//! Text はそのまま読み、それ以外は抽出器が扱う。

use std::path::Path;

const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "log", "js", "jsx", "ts", "tsx", "py", "java", "sql", "json", "md", "yml", "yaml",
    "toml", "xml", "csv", "sh", "out", "err",
];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "ogg", "flac", "webm", "aac"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Image,
    Audio,
    /// doc / docx / pdf など、テキストでも画像・音声でもないもの
    Document,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some(e) if TEXT_EXTENSIONS.contains(&e) => FileKind::Text,
            Some(e) if IMAGE_EXTENSIONS.contains(&e) => FileKind::Image,
            Some(e) if AUDIO_EXTENSIONS.contains(&e) => FileKind::Audio,
            _ => FileKind::Document,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(FileKind::from_path(Path::new("server.log")), FileKind::Text);
        assert_eq!(FileKind::from_path(Path::new("App.TSX")), FileKind::Text);
        assert_eq!(FileKind::from_path(Path::new("shot.PNG")), FileKind::Image);
        assert_eq!(FileKind::from_path(Path::new("memo.m4a")), FileKind::Audio);
        assert_eq!(FileKind::from_path(Path::new("report.docx")), FileKind::Document);
        assert_eq!(FileKind::from_path(Path::new("Makefile")), FileKind::Document);
    }
}
