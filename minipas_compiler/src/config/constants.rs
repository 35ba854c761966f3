pub mod compile_time {
    pub mod file_processing {
        /// Maximum source file size accepted for analysis (4MB)
        pub const MAX_FILE_SIZE: u64 = 4 * 1024 * 1024;

        /// Sources above this size are reported as large in metrics
        pub const LARGE_FILE_THRESHOLD: u64 = 256 * 1024;
    }

    pub mod lexical {
        /// Longest identifier or constant the scanner will emit
        pub const MAX_IDENTIFIER_LENGTH: usize = 16;
    }

    pub mod handoff {
        /// Lexemes are right-aligned to this width in `.dyd` records
        pub const LEXEME_WIDTH: usize = 16;

        /// Extension of the persisted token stream
        pub const FILE_EXTENSION: &str = "dyd";
    }

    pub mod report {
        /// Width of each left-aligned column in the `.var` and `.pro` tables
        pub const COLUMN_WIDTH: usize = 10;

        /// Owner recorded for variables declared outside any function
        pub const TOP_LEVEL_OWNER: &str = "main";
    }

    pub mod logging {
        /// Events retained by a `MemoryLogger` before the oldest are dropped
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Longest message accepted by the logging service before truncation
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 2_048;
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::*;

    #[test]
    fn test_limits_are_consistent() {
        assert_eq!(lexical::MAX_IDENTIFIER_LENGTH, 16);
        assert!(handoff::LEXEME_WIDTH >= lexical::MAX_IDENTIFIER_LENGTH);
        assert!(file_processing::LARGE_FILE_THRESHOLD <= file_processing::MAX_FILE_SIZE);
        assert!(report::TOP_LEVEL_OWNER.len() <= report::COLUMN_WIDTH);
    }
}
