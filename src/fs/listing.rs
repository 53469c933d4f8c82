//! Source folder listing and offset selection.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::naming::decode_upload_name;

/// A file queued for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Directory entry name, as listed (lossy for non-UTF-8 names).
    pub name: String,
    /// Full path used to open the file.
    pub path: PathBuf,
}

impl SourceFile {
    /// Build a source file for `name` inside `folder`.
    pub fn new(folder: &Path, name: String) -> Self {
        Self {
            path: folder.join(&name),
            name,
        }
    }

    fn from_entry(folder: &Path, raw: OsString) -> Self {
        Self {
            path: folder.join(&raw),
            name: raw.to_string_lossy().into_owned(),
        }
    }

    /// Name the file is uploaded under.
    ///
    /// Decoded on demand so only files that are actually uploaded are touched.
    pub fn upload_name(&self) -> String {
        decode_upload_name(&self.name)
    }
}

/// Files of a source folder in upload order.
#[derive(Debug, Clone, Default)]
pub struct SourceListing {
    pub files: Vec<SourceFile>,
    /// Sub-directories left out of the listing.
    pub skipped_dirs: usize,
}

/// List the files of `folder` sorted by name.
///
/// The listing is not recursive: sub-directories are skipped and counted.
/// Names are compared byte-wise, so the order does not depend on the
/// platform's listing order or locale.
pub fn list_source_files(folder: &Path) -> Result<SourceListing> {
    let mut names = Vec::new();
    let mut skipped_dirs = 0;

    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;

        // Follows symlinks, so a link to a file counts as a file
        if std::fs::metadata(entry.path())?.is_dir() {
            tracing::debug!("Skipping directory {}", entry.path().display());
            skipped_dirs += 1;
            continue;
        }

        names.push(entry.file_name());
    }

    names.sort();

    if skipped_dirs > 0 {
        tracing::warn!(
            "Skipped {} sub-director{} of {}; they do not count towards the offset",
            skipped_dirs,
            if skipped_dirs == 1 { "y" } else { "ies" },
            folder.display()
        );
    }

    Ok(SourceListing {
        files: names
            .into_iter()
            .map(|raw| SourceFile::from_entry(folder, raw))
            .collect(),
        skipped_dirs,
    })
}

/// The sorted listing and the position to resume from.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    files: Vec<SourceFile>,
    start: usize,
    skipped_dirs: usize,
}

impl BatchPlan {
    /// Plan a batch over `files` starting at the 1-based `offset`.
    ///
    /// An offset past the end yields an empty batch.
    pub fn new(files: Vec<SourceFile>, offset: usize) -> Result<Self> {
        if offset == 0 {
            return Err(Error::ConfigValidation {
                field: "image_offset".to_string(),
                message: "Offset is 1-based, use 1 to start with the first file".to_string(),
            });
        }

        let start = (offset - 1).min(files.len());
        Ok(Self {
            files,
            start,
            skipped_dirs: 0,
        })
    }

    /// List `folder` and plan a batch from `offset`.
    pub fn from_folder(folder: &Path, offset: usize) -> Result<Self> {
        let listing = list_source_files(folder)?;
        let mut plan = Self::new(listing.files, offset)?;
        plan.skipped_dirs = listing.skipped_dirs;
        Ok(plan)
    }

    /// Number of files in the whole listing.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Number of files this batch will upload.
    pub fn remaining(&self) -> usize {
        self.files.len() - self.start
    }

    /// Number of sub-directories left out of the listing.
    pub fn skipped_dirs(&self) -> usize {
        self.skipped_dirs
    }

    /// Files to upload, with their 1-based position in the full listing.
    pub fn pending(&self) -> impl Iterator<Item = (usize, &SourceFile)> {
        self.files
            .iter()
            .enumerate()
            .skip(self.start)
            .map(|(index, file)| (index + 1, file))
    }
}
