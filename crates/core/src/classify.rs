use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::FileType;

/// Built-in file types. Fixed at compile time; not user-configurable.
pub const FILE_TYPES: &[FileType] = &[
    FileType {
        name: "JPEG",
        extensions: &["jpg", "jpeg"],
    },
    FileType {
        name: "RAW",
        extensions: &[
            "raw", "dng", // generic
            "arw", "srf", "sr2", // Sony
            "rwl", // Leica
            "raf", // Fujifilm
            "nef", "nrw", // Nikon
            "crw", "cr2", "cr3", // Canon
            "erf", // Epson
            "3fr", // Hasselblad
            "mef", // Mamiya
            "mrw", // Konica Minolta
            "orf", // Olympus
            "ptx", "pef", // Pentax
            "rw2", // Panasonic
            "srw", // Samsung
            "x3f", // Sigma
        ],
    },
];

// Flattened once; last write would win on a duplicate extension, but the
// built-in table has none.
static EXTENSION_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for file_type in FILE_TYPES {
        for extension in file_type.extensions {
            index.insert(*extension, file_type.name);
        }
    }
    index
});

/// Maps a filename to its file-type name by extension, case-insensitively.
///
/// The extension is the text after the last `.`. Filenames without one,
/// including dotfiles such as `.jpg`, map to `None`.
pub fn category_for(filename: &str) -> Option<&'static str> {
    let lowered = filename.to_lowercase();
    let (stem, extension) = lowered.rsplit_once('.')?;
    if stem.trim_start_matches('.').is_empty() {
        return None;
    }
    EXTENSION_INDEX.get(extension).copied()
}

#[cfg(test)]
mod tests {
    use super::category_for;

    #[test]
    fn matches_extensions_case_insensitively() {
        assert_eq!(category_for("IMG_0001.JPG"), Some("JPEG"));
        assert_eq!(category_for("img_0002.jpeg"), Some("JPEG"));
        assert_eq!(category_for("DSC_0001.NEF"), Some("RAW"));
        assert_eq!(category_for("shot.cr3"), Some("RAW"));
    }

    #[test]
    fn ignores_unknown_and_missing_extensions() {
        assert_eq!(category_for("notes.txt"), None);
        assert_eq!(category_for("archive"), None);
        assert_eq!(category_for("trailing."), None);
    }

    #[test]
    fn dotfiles_have_no_extension() {
        assert_eq!(category_for(".jpg"), None);
        assert_eq!(category_for("..jpg"), None);
        assert_eq!(category_for(".hidden.jpg"), Some("JPEG"));
    }
}
