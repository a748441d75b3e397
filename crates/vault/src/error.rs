use thiserror::Error;

pub type Result<T> = std::result::Result<T, VaultError>;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("State error: {0}")]
    State(#[from] serde_json::Error),

    #[error("Malformed frontmatter: {0}")]
    MalformedFrontmatter(String),

    #[error("Invalid vault root: {0}")]
    InvalidRoot(String),
}
