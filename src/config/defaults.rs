use std::path::PathBuf;

pub fn default_site_name() -> String {
    "My Docs".to_string()
}

pub fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

pub fn default_site_dir() -> PathBuf {
    PathBuf::from("site")
}

pub fn default_theme() -> String {
    "basic".to_string()
}

pub fn default_use_directory_urls() -> bool {
    true
}

pub fn default_dev_addr() -> String {
    "127.0.0.1:8000".to_string()
}

pub fn default_remote_branch() -> String {
    "gh-pages".to_string()
}

pub fn default_remote_name() -> String {
    "origin".to_string()
}

pub fn default_markdown_ext() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}
