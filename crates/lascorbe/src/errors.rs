//! Error types for the website.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are printed with Debug, show the message instead.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum ConfigError {
    #[error("Failed to read site configuration: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse site configuration: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Site URL `{url}` must start with `http://` or `https://`")]
    InvalidUrl { url: String },
    #[error("Site name cannot be empty")]
    EmptyName,
}

#[derive(Error)]
pub enum RouteError {
    #[error("No post is tagged with `{slug}`")]
    UnknownTag { slug: String },
    #[error("The theme did not produce a tag list")]
    NoTagList,
}

impl_debug_for_error!(ConfigError, RouteError);
