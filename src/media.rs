// Copyright 2026 the quizdeck authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Referencing and serving image attachments.

use std::path::Component;
use std::path::PathBuf;

use percent_encoding::AsciiSet;
use percent_encoding::CONTROLS;
use percent_encoding::utf8_percent_encode;

/// Characters beyond the URL-path safe set that must be escaped in media
/// paths.
const PATH_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Rewrite a Markdown image URL to the server's media route. External URLs
/// are left untouched.
pub fn media_url(url: &str) -> String {
    if url.contains("://") {
        return url.to_string();
    }
    format!("/file/{}", utf8_percent_encode(url, PATH_ESCAPE))
}

/// The media store takes collection-relative file paths and returns the
/// absolute path to the file, if it exists.
///
/// This takes unsafe strings from the client, so we have to ensure there's
/// no possibility of directory traversals.
pub struct MediaStore {
    /// Absolute path to the collection root directory.
    root: PathBuf,
}

/// Errors that can occur when validating a media path.
#[derive(Debug, PartialEq)]
pub enum MediaError {
    /// Path is absolute.
    Absolute,
    /// Path does not exist.
    NotFound,
    /// Path is not a file.
    NotFile,
    /// Path points to a symbolic link.
    SymbolicLink,
    /// Path contains parent (`..`) components.
    ParentComponent,
}

impl MediaStore {
    /// Construct a new [`MediaStore`].
    pub fn new(root: PathBuf) -> Self {
        assert!(root.is_absolute());
        Self { root }
    }

    /// Given a path string from the client, check that a file exists at
    /// that location within the collection root directory.
    ///
    /// Symbolic links and absolute paths are rejected.
    pub fn validate(&self, path: &str) -> Result<PathBuf, MediaError> {
        let path: PathBuf = PathBuf::from(path);
        if path.components().any(|c| c == Component::ParentDir) {
            return Err(MediaError::ParentComponent);
        }
        if path.is_absolute() {
            return Err(MediaError::Absolute);
        }
        let path: PathBuf = self.root.join(path);
        if !path.exists() {
            return Err(MediaError::NotFound);
        }
        if path.is_symlink() {
            return Err(MediaError::SymbolicLink);
        }
        if !path.is_file() {
            return Err(MediaError::NotFile);
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizdeck_core::Fallible;

    use crate::helper::create_tmp_directory;

    #[test]
    fn test_external_urls_are_left_alone() {
        assert_eq!(
            media_url("https://example.com/cat.jpg"),
            "https://example.com/cat.jpg"
        );
    }

    #[test]
    fn test_local_paths_use_the_media_route() {
        assert_eq!(media_url("cat.jpg"), "/file/cat.jpg");
        assert_eq!(media_url("pics/cat.jpg"), "/file/pics/cat.jpg");
    }

    #[test]
    fn test_spaces_are_escaped() {
        assert_eq!(media_url("my cat.jpg"), "/file/my%20cat.jpg");
    }

    /// Absolute paths are rejected.
    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_abs_rejected() -> Fallible<()> {
        let root = create_tmp_directory()?;
        let store = MediaStore::new(root);
        assert_eq!(store.validate("/etc/passwd"), Err(MediaError::Absolute));
        Ok(())
    }

    /// Paths with parent components are rejected.
    #[test]
    fn test_parent() -> Fallible<()> {
        let root = create_tmp_directory()?;
        let store = MediaStore::new(root);
        assert_eq!(
            store.validate("../../../../../../../../../../etc/passwd"),
            Err(MediaError::ParentComponent)
        );
        Ok(())
    }

    /// Paths to non-existent files are rejected.
    #[test]
    fn test_non_existent() -> Fallible<()> {
        let root = create_tmp_directory()?;
        let store = MediaStore::new(root);
        assert_eq!(
            store.validate("does_not_exist.jpg"),
            Err(MediaError::NotFound)
        );
        Ok(())
    }

    /// Paths to symlinks are rejected.
    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_symlink() -> Fallible<()> {
        use std::fs::File;
        use std::os::unix::fs::symlink;

        let root = create_tmp_directory()?;
        let store = MediaStore::new(root.clone());

        let real_file = root.join("real.jpg");
        File::create(&real_file)?;
        let link_path = root.join("link.jpg");
        symlink(&real_file, &link_path)?;

        assert_eq!(store.validate("link.jpg"), Err(MediaError::SymbolicLink));
        Ok(())
    }

    /// Paths to directories are rejected.
    #[test]
    fn test_dir() -> Fallible<()> {
        use std::fs::create_dir;

        let root = create_tmp_directory()?;
        let store = MediaStore::new(root.clone());

        let subdir = root.join("subdir");
        create_dir(&subdir)?;

        assert_eq!(store.validate("subdir"), Err(MediaError::NotFile));
        Ok(())
    }
}
