use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("invalid image file pattern")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to read a directory entry")]
    Glob(#[from] glob::GlobError),
}
type Result<T> = std::result::Result<T, DiscoverError>;

/// List the image files of a batch directory
///
/// Keeps the files ending in `extension` whose name contains the `filter`
/// term, sorted by name; an empty filter keeps everything.
pub fn image_files<P: AsRef<Path>>(
    directory: P,
    extension: &str,
    filter: &str,
) -> Result<Vec<PathBuf>> {
    let pattern = directory.as_ref().join(format!("*{extension}"));
    let mut files = glob::glob(&pattern.to_string_lossy())?
        .collect::<std::result::Result<Vec<PathBuf>, glob::GlobError>>()?;
    files.retain(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| name.contains(filter))
    });
    files.sort();
    log::debug!(
        "{} files matching *{} in {:?}",
        files.len(),
        extension,
        directory.as_ref()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn filters_by_extension_and_term() {
        let dir = std::env::temp_dir().join(format!(
            "parse-droplets-discover-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        for name in [
            "x_a-1,2-1.bmp",
            "x_a-1,2-2.bmp",
            "y_b-1,3-1.bmp",
            "x_a-1,2-1.png",
            "notes.txt",
        ] {
            std::fs::write(dir.join(name), b"").unwrap();
        }

        let all = image_files(&dir, ".bmp", "").unwrap();
        assert_eq!(
            names(&all),
            vec!["x_a-1,2-1.bmp", "x_a-1,2-2.bmp", "y_b-1,3-1.bmp"]
        );
        let filtered = image_files(&dir, ".bmp", "x_a").unwrap();
        assert_eq!(names(&filtered), vec!["x_a-1,2-1.bmp", "x_a-1,2-2.bmp"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
