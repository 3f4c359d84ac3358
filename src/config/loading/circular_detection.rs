use crate::{CoursekitError, Result};
use std::path::{Path, PathBuf};

/// Files currently being loaded, outermost first
#[derive(Default)]
pub(super) struct ImportChain {
    files: Vec<PathBuf>,
}

impl ImportChain {
    /// Pushes `path` onto the chain, failing if it is already being loaded
    pub(super) fn enter(&mut self, path: &Path) -> Result<()> {
        if self.files.iter().any(|p| p == path) {
            let chain: Vec<String> = self
                .files
                .iter()
                .chain(std::iter::once(&path.to_path_buf()))
                .map(|p| display_name(p))
                .collect();

            return Err(CoursekitError::ConfigValidation {
                component: "import system".to_string(),
                details: format!("Circular import detected: {}", chain.join(" -> ")),
            });
        }

        self.files.push(path.to_path_buf());
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.files.pop();
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
