//! Static site files served for non-API GET/HEAD requests.

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

const INDEX_FILE: &str = "index.html";

/// Map a request path onto a file under `root`.
///
/// Query strings are ignored and `/` or a directory falls back to `index.html`.
/// The path is percent-decoded before it is checked, and any path that would
/// step outside `root` is refused.
pub fn resolve(root: &Path, url_path: &str) -> Option<PathBuf> {
    let raw = url_path.split(['?', '#']).next().unwrap_or_default();
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let path = decoded.as_ref();
    if path.contains('\0') {
        return None;
    }
    let relative = Path::new(path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    if path.contains('\\') {
        return None;
    }

    let mut candidate = root.join(relative);
    if candidate.is_dir() {
        candidate.push(INDEX_FILE);
    }
    candidate.is_file().then_some(candidate)
}

pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "json" => "application/json",
        "wasm" => "application/wasm",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
        fs::create_dir(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("css/style.css"), "body{}").unwrap();
        fs::create_dir(dir.path().join("blog")).unwrap();
        fs::write(dir.path().join("blog/index.html"), "<h1>blog</h1>").unwrap();
        dir
    }

    #[test]
    fn root_serves_index() {
        let dir = site();
        assert_eq!(resolve(dir.path(), "/"), Some(dir.path().join("index.html")));
    }

    #[test]
    fn nested_files_and_directory_index() {
        let dir = site();
        assert_eq!(
            resolve(dir.path(), "/css/style.css?v=3"),
            Some(dir.path().join("css/style.css"))
        );
        assert_eq!(
            resolve(dir.path(), "/blog/"),
            Some(dir.path().join("blog/index.html"))
        );
    }

    #[test]
    fn missing_file_is_none() {
        let dir = site();
        assert_eq!(resolve(dir.path(), "/nope.html"), None);
    }

    #[test]
    fn traversal_is_refused() {
        let dir = site();
        let inner = dir.path().join("css");
        assert_eq!(resolve(&inner, "/../index.html"), None);
        assert_eq!(resolve(&inner, "/./style.css"), None);
        assert_eq!(resolve(dir.path(), "/css\\..\\index.html"), None);
    }

    #[test]
    fn percent_encoded_names_are_decoded() {
        let dir = site();
        fs::write(dir.path().join("my page.html"), "<p>hi</p>").unwrap();
        assert_eq!(
            resolve(dir.path(), "/my%20page.html"),
            Some(dir.path().join("my page.html"))
        );
        assert_eq!(
            resolve(dir.path(), "/css/%73tyle.css"),
            Some(dir.path().join("css/style.css"))
        );
    }

    #[test]
    fn encoded_traversal_is_refused() {
        let dir = site();
        let inner = dir.path().join("css");
        assert_eq!(resolve(&inner, "/%2e%2e/index.html"), None);
        assert_eq!(resolve(&inner, "/..%2Findex.html"), None);
        assert_eq!(resolve(dir.path(), "/css%5C..%5Cindex.html"), None);
        assert_eq!(resolve(dir.path(), "/index.html%00.css"), None);
        assert_eq!(resolve(dir.path(), "/%ff.html"), None);
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type(Path::new("a/index.HTML")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("pkg/site_web_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
    }
}
