//! Input and output path conventions.
//!
//! Lessons are read from the directory above the working directory and the
//! slide deck is written into the working directory itself.

use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

/// Lesson read when no input is given.
pub const DEFAULT_INPUT: &str = "ggplot2.Rmd";

/// Directory, relative to the working directory, that holds the lessons.
pub const INPUT_PARENT: &str = "..";

/// Marker added to the output file name.
pub const SLIDES_SUFFIX: &str = "_slides";

/// Extension given to the slide deck when the input has one.
pub const SLIDES_EXTENSION: &str = ".Rmd";

/// Trailing `.ext` of a file name.
static EXTENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\w+$").unwrap());

/// Resolve a lesson name to the path it is read from.
///
/// The result always sits under [`INPUT_PARENT`]; a root or drive prefix on
/// `name` is dropped rather than replacing the parent.
pub fn input_path(name: &str) -> PathBuf {
    let relative: PathBuf = Path::new(name)
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();

    Path::new(INPUT_PARENT).join(relative)
}

/// Derive the slide deck file name from an input name.
///
/// `ggplot2.Rmd` becomes `ggplot2_slides.Rmd`; a name with no extension
/// just gets the suffix, so `notes` becomes `notes_slides`. Any directory
/// part of the input is dropped.
pub fn output_file_name(input: &str) -> String {
    let name = Path::new(input)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(input);

    match EXTENSION_REGEX.find(name) {
        Some(ext) => format!("{}{}{}", &name[..ext.start()], SLIDES_SUFFIX, SLIDES_EXTENSION),
        None => format!("{}{}", name, SLIDES_SUFFIX),
    }
}
