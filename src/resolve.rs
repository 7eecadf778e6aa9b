//! Resolving relative asset references against the descriptor's directory.

//---------------------------------------------------------------------------------------------------- Use
use std::path::{Path, PathBuf};

//---------------------------------------------------------------------------------------------------- resolve_asset
/// Resolve a relative asset filename against `base`.
///
/// Returns the joined path only if the file exists on disk.
/// An absent/empty `filename` resolves to `None`, not an error.
#[must_use]
pub fn resolve_asset(base: &Path, filename: Option<&str>) -> Option<PathBuf> {
	let filename = filename?;
	if filename.is_empty() {
		return None;
	}

	let path = base.join(normalize_separators(filename).as_ref());

	path.exists().then_some(path)
}

/// Normalize path separators for the target platform.
///
/// Descriptor files written on other systems may reference
/// sub-directory assets with `/`, which Windows joins need as `\`.
fn normalize_separators(filename: &str) -> std::borrow::Cow<'_, str> {
	cfg_if::cfg_if! {
		if #[cfg(windows)] {
			std::borrow::Cow::Owned(filename.replace('/', "\\"))
		} else {
			std::borrow::Cow::Borrowed(filename)
		}
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn absent_or_empty_is_not_found() {
		let base = Path::new("/nonexistent");
		assert_eq!(resolve_asset(base, None), None);
		assert_eq!(resolve_asset(base, Some("")), None);
	}

	#[test]
	fn missing_file_is_not_found() {
		let dir = tempfile::tempdir().unwrap();
		assert_eq!(resolve_asset(dir.path(), Some("missing.mp3")), None);
	}

	#[test]
	fn existing_file_resolves_to_joined_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("audio.mp3");
		std::fs::write(&path, b"x").unwrap();

		assert_eq!(resolve_asset(dir.path(), Some("audio.mp3")), Some(path));
	}

	#[test]
	fn sub_directory_references_resolve() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::create_dir(dir.path().join("sb")).unwrap();
		let path = dir.path().join("sb").join("bg.jpg");
		std::fs::write(&path, b"x").unwrap();

		let resolved = resolve_asset(dir.path(), Some("sb/bg.jpg")).unwrap();
		assert_eq!(std::fs::canonicalize(resolved).unwrap(), std::fs::canonicalize(path).unwrap());
	}
}
