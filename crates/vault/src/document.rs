use std::fs;
use std::path::{Path, PathBuf};

use tagsync_engine::MetadataMap;

use crate::frontmatter::{split_frontmatter, Frontmatter};
use crate::Result;

/// One markdown document with a parsed frontmatter block.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,

    /// Vault-relative path with `/` separators; key for per-document state.
    pub rel_path: String,

    frontmatter: Frontmatter,
    body: String,

    /// Current tag sequence, in document order.
    pub tags: Vec<String>,

    /// Every frontmatter field except `tags`.
    pub metadata: MetadataMap,
}

impl Document {
    /// Load a document from disk. Returns `Ok(None)` when the file has no
    /// frontmatter block — such documents are not synchronized.
    pub fn load(root: &Path, path: &Path) -> Result<Option<Self>> {
        let text = fs::read_to_string(path)?;
        let Some((yaml, body)) = split_frontmatter(&text) else {
            return Ok(None);
        };
        let frontmatter = Frontmatter::parse(yaml)?;

        let rel_path = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let tags = frontmatter.tags();
        let metadata = frontmatter.metadata();
        Ok(Some(Self {
            path: path.to_path_buf(),
            rel_path,
            frontmatter,
            body: body.to_string(),
            tags,
            metadata,
        }))
    }

    /// Rewrite the document with a new tag sequence (`None` removes the tags
    /// key). Every other frontmatter key and the body are preserved.
    pub fn write_with_tags(&self, tags: Option<&[String]>) -> Result<()> {
        let mut frontmatter = self.frontmatter.clone();
        frontmatter.set_tags(tags);
        let yaml = frontmatter.render()?;
        let text = format!("---\n{yaml}---\n{}", self.body);
        fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagsync_engine::FieldValue;

    #[test]
    fn load_and_rewrite_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");
        fs::write(
            &path,
            "---\ntitle: A Note\ntags:\n- old\nrating: 5\n---\n# Heading\n\nBody.\n",
        )
        .unwrap();

        let doc = Document::load(dir.path(), &path).unwrap().unwrap();
        assert_eq!(doc.rel_path, "note.md");
        assert_eq!(doc.tags, vec!["old"]);
        assert_eq!(doc.metadata.get("rating"), Some(&FieldValue::Int(5)));

        doc.write_with_tags(Some(&["fresh".to_string()])).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "---\ntitle: A Note\ntags:\n- fresh\nrating: 5\n---\n# Heading\n\nBody.\n"
        );
    }

    #[test]
    fn load_without_frontmatter_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.md");
        fs::write(&path, "No header here.\n").unwrap();
        assert!(Document::load(dir.path(), &path).unwrap().is_none());
    }
}
