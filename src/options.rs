use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The batch conversion options file: a list of input directories and one
/// output directory. All paths are interpreted relative to the directory
/// containing the options file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    pub input: Vec<String>,
    pub output: String,
}

impl Options {
    /// Load conversion options from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let options = serde_json::from_str(&content)?;
        Ok(options)
    }

    /// Resolves the (input, output) directory pair for one input entry.
    ///
    /// The converted files of input directory `d` land in `<output>/<d>`,
    /// mirroring the input layout under the output root.
    pub fn directory_pair(&self, base_dir: &Path, input: &str) -> (PathBuf, PathBuf) {
        (
            base_dir.join(input),
            base_dir.join(&self.output).join(input),
        )
    }
}
