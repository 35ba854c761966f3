//! Source file loading
//!
//! Validates the path, enforces the compile-time size limit, and reads the
//! file as UTF-8 text before any analysis starts.

mod processor;

use crate::config::runtime::FileProcessorPreferences;
use std::path::Path;

pub use processor::{FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError};

/// Process a file with default settings
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<FileProcessingResult, FileProcessorError> {
    FileProcessor::new().process_file(file_path)
}

/// Processor configured from runtime preferences
pub fn create_processor_from_preferences(prefs: &FileProcessorPreferences) -> FileProcessor {
    FileProcessor::from_preferences(prefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_module_api() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "begin end").unwrap();

        let result = process_file(file.path()).unwrap();
        assert_eq!(result.char_count(), 9);

        let prefs = FileProcessorPreferences {
            enable_performance_logging: true,
        };
        assert!(create_processor_from_preferences(&prefs).enable_performance_logging);
    }
}
