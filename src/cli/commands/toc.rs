use std::fs;
use std::path::Path;

use log::debug;

use crate::cli::types::TocOptions;
use crate::structure::toc::{build_toc, HeadingToken};
use crate::utils::error::{BoxResult, DocsmithError};

/// Handle the toc command, printing the outline for a heading-token file
pub fn handle_toc_command(options: &TocOptions) -> BoxResult<()> {
    print!("{}", render_toc_file(&options.tokens_file)?);
    Ok(())
}

/// Read a heading-token file and render the outline of its table of contents
fn render_toc_file(path: &Path) -> BoxResult<String> {
    let content = fs::read_to_string(path)
        .map_err(|e| DocsmithError::Toc(format!("failed to read {}: {}", path.display(), e)))?;

    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase());
    let tokens: Vec<HeadingToken> = match ext.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            DocsmithError::Toc(format!("malformed token file {}: {}", path.display(), e))
        })?,
        // Heading tokens travel as YAML unless the extension says otherwise
        _ => serde_yaml::from_str(&content).map_err(|e| {
            DocsmithError::Toc(format!("malformed token file {}: {}", path.display(), e))
        })?,
    };

    let toc = build_toc(&tokens);
    debug!("Table of contents has {} top-level entries", toc.len());
    Ok(toc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_json_tokens_render_an_outline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        fs::write(
            &path,
            r#"[{"title": "Intro", "id": "intro", "level": 1,
                "children": [{"title": "Sub", "id": "intro-sub", "level": 2}]}]"#,
        )
        .unwrap();

        let outline = render_toc_file(&path).unwrap();

        assert_eq!(outline, "Intro - #intro\n    Sub - #intro-sub\n");
    }

    #[test]
    fn test_yaml_tokens_render_an_outline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.yml");
        fs::write(
            &path,
            "- title: Intro\n  id: intro\n  level: 1\n- title: Usage\n  id: usage\n  level: 1\n",
        )
        .unwrap();

        let outline = render_toc_file(&path).unwrap();

        assert_eq!(outline, "Intro - #intro\nUsage - #usage\n");
    }

    #[test]
    fn test_malformed_tokens_are_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        fs::write(&path, r#"[{"title": "Intro"}]"#).unwrap();

        assert!(render_toc_file(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();

        assert!(render_toc_file(&dir.path().join("absent.json")).is_err());
    }
}
