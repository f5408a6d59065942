//! Challenge extraction from lesson documents and slidy slide formatting.

pub mod error;
pub mod extract;
pub mod paths;
pub mod slides;
pub mod types;

pub use error::{Error, Result};
pub use extract::{extract_file, ChallengeExtractor};
pub use paths::{input_path, output_file_name, DEFAULT_INPUT};
pub use slides::{write_slides, SlidyFormatter};
pub use types::Challenge;
