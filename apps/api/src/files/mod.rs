// Static documents served from the downloads directory: code previews and
// fixed PDF downloads.

pub mod handlers;

use std::path::{Path, PathBuf};

/// A fixed document offered as an attachment download.
#[derive(Debug, Clone, Copy)]
pub struct Document {
    /// File name inside the downloads directory.
    pub file_name: &'static str,
    /// Name the browser saves the file as.
    pub download_name: &'static str,
}

pub const TRANSCRIPT: Document = Document {
    file_name: "Academic_Transcript.pdf",
    download_name: "Wang_Mingkai_Academic_Transcript.pdf",
};

pub const RESUME: Document = Document {
    file_name: "mingkai_wang_resume.pdf",
    download_name: "Wang_Mingkai_Resume.pdf",
};

/// Syntax-highlighting hint derived from the file extension.
pub fn language_for(filename: &str) -> &'static str {
    const LANGUAGES: &[(&str, &str)] = &[
        (".py", "python"),
        (".js", "javascript"),
        (".sql", "sql"),
        (".html", "html"),
        (".css", "css"),
        (".json", "json"),
    ];
    LANGUAGES
        .iter()
        .find(|(suffix, _)| filename.ends_with(suffix))
        .map(|(_, language)| *language)
        .unwrap_or("text")
}

/// SQL and JavaScript previews are read-only: no copy affordance.
pub fn allows_copy(filename: &str) -> bool {
    !matches!(language_for(filename), "sql" | "javascript")
}

/// Resolves a bare file name inside `dir`. Anything that could escape the
/// directory resolves to `None` and is treated as a missing file.
pub fn resolve(dir: &Path, filename: &str) -> Option<PathBuf> {
    let invalid = filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..");
    if invalid {
        return None;
    }
    Some(dir.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_mapping() {
        assert_eq!(language_for("model.py"), "python");
        assert_eq!(language_for("app.js"), "javascript");
        assert_eq!(language_for("schema.sql"), "sql");
        assert_eq!(language_for("index.html"), "html");
        assert_eq!(language_for("site.css"), "css");
        assert_eq!(language_for("data.json"), "json");
        assert_eq!(language_for("README"), "text");
        assert_eq!(language_for("notes.md"), "text");
        // Suffix match, so bare dotfiles still get a hint
        assert_eq!(language_for(".py"), "python");
        assert_eq!(language_for("archive.tar.json"), "json");
    }

    #[test]
    fn test_copy_disabled_for_sql_and_js() {
        assert!(!allows_copy("query.sql"));
        assert!(!allows_copy("chart.js"));
        assert!(allows_copy("train.py"));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dir = Path::new("static/downloads");
        assert!(resolve(dir, "../secret.txt").is_none());
        assert!(resolve(dir, "nested/file.py").is_none());
        assert!(resolve(dir, "..\\win.ini").is_none());
        assert!(resolve(dir, "").is_none());
        assert_eq!(
            resolve(dir, "model.py"),
            Some(PathBuf::from("static/downloads/model.py"))
        );
    }
}
