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

//! Helpers for tests.

use std::fs::create_dir_all;
use std::fs::write;
use std::path::PathBuf;

use tempfile::tempdir;

use quizdeck_core::Fallible;

/// Create an empty temporary directory and return its absolute path.
pub fn create_tmp_directory() -> Fallible<PathBuf> {
    let dir = tempdir()?.path().to_path_buf();
    create_dir_all(&dir)?;
    Ok(dir.canonicalize()?)
}

/// Create a temporary collection with one four-term topic file and a media
/// file, returning the directory path.
pub fn create_tmp_collection() -> Fallible<String> {
    let dir = create_tmp_directory()?;
    write(
        dir.join("letters.md"),
        "alpha: first letter\nbeta: second letter\ngamma: third letter\ndelta: fourth letter\n",
    )?;
    write(dir.join("foo.jpg"), b"not really a jpeg")?;
    Ok(dir.display().to_string())
}

/// Create a temporary collection whose only topic is below the quiz floor.
pub fn create_tmp_small_collection() -> Fallible<String> {
    let dir = create_tmp_directory()?;
    write(
        dir.join("tiny.md"),
        "alpha: first letter\nbeta: second letter\ngamma: third letter\n",
    )?;
    Ok(dir.display().to_string())
}
