use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gridatlas operations
#[derive(Error, Diagnostic, Debug)]
pub enum AtlasError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(gridatlas::io))]
    Io { path: PathBuf, message: String },

    #[error("Input not found: {path}")]
    #[diagnostic(
        code(gridatlas::input_not_found),
        help("Check the path to the sprite sheet")
    )]
    InputNotFound { path: PathBuf },

    #[error("Failed to open image {path}: {message}")]
    #[diagnostic(code(gridatlas::image))]
    ImageLoad { path: PathBuf, message: String },

    #[error("Invalid name token '{token}': {message}")]
    #[diagnostic(
        code(gridatlas::names),
        help("Use name or name:count, for example: idle walk:8")
    )]
    NameCount { token: String, message: String },

    #[error("Bad --dup entry '{entry}': {message}")]
    #[diagnostic(
        code(gridatlas::dup),
        help("Use alias=target:idx or alias:idx=target:idx")
    )]
    DupSyntax { entry: String, message: String },

    #[error("--dup target not found: {name}:{index}")]
    #[diagnostic(code(gridatlas::dup))]
    DupTargetNotFound {
        name: String,
        index: u32,
        #[help]
        help: Option<String>,
    },

    #[error("Duplicate region {name}:{index}")]
    #[diagnostic(
        code(gridatlas::duplicate),
        help("Each name:index pair may appear only once across --names and --dup")
    )]
    DuplicateRegion { name: String, index: u32 },

    #[error("Invalid grid: {message}")]
    #[diagnostic(code(gridatlas::grid))]
    InvalidGrid {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error in {path}: {message}")]
    #[diagnostic(code(gridatlas::config), help("Check gridatlas.yaml syntax"))]
    Config { path: PathBuf, message: String },

    #[error("Serialization error: {message}")]
    #[diagnostic(code(gridatlas::serialize))]
    Serialize { message: String },
}

pub type Result<T> = std::result::Result<T, AtlasError>;
