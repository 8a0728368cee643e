//! Test fixtures for webserver integration tests

use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use shared::{Directory, SiteConfig};
use webserver::KeywordSearchIndex;
use webserver::core::{EXIT_TRANSITION, HomepageProps};

pub const DIRECTORY_JSON: &str = r#"[
    {"id": "bakery", "title": "Good Bakery", "description": "Fresh bread baked by youth in training",
     "logo": "bakery.svg", "website": "https://bakery.example.org", "tags": ["food", "catering"]},
    {"id": "bikes", "title": "Re-Cycle Ottawa", "description": "Refurbished bicycles and repair workshops",
     "logo": "bikes.svg", "website": "https://bikes.example.org", "tags": ["transport"]},
    {"id": "cafe", "title": "Café Inclusion", "description": "Coffee, lunch and catering for events",
     "logo": "cafe.svg", "website": "https://cafe.example.org", "tags": ["food"]},
    {"id": "print", "title": "Print Works", "description": "Printing and design services in Ottawa",
     "logo": "print.svg", "website": "https://print.example.org"}
]"#;

pub fn create_test_directory() -> Directory {
    Directory::from_json(DIRECTORY_JSON, "fixtures").unwrap()
}

/// Homepage collaborators backed by the real keyword index
pub fn create_test_props() -> HomepageProps {
    let directory = create_test_directory();
    let index = KeywordSearchIndex::build(&directory);
    HomepageProps {
        directory: Arc::new(directory),
        index: Arc::new(index),
        config: SiteConfig::default(),
        transition: EXIT_TRANSITION,
    }
}

/// Temporary static directory with a stylesheet and one logo
pub fn create_static_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "styles.css", b".intro.slide-up { opacity: 0; }");
    write_file(dir.path(), "homepage.js", b"(function () {})();");
    write_file(dir.path(), "images/logos/bakery.svg", b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>");
    dir
}

fn write_file(base: &Path, relative: &str, content: &[u8]) {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
