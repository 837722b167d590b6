pub const DOC_PATH: &str = "doc.txt";
pub const DOC_CONTENT: &str = "Hello World";

pub const DATA_BIN_PATH: &str = "data.bin";
pub const DATA_BIN_SIZE: usize = 10_000;

pub const README_PATH: &str = "readme";
pub const README_CONTENT: &str = "No extension";

pub const DEEP_PATH: &str = "sub/deep.txt";
pub const DEEP_CONTENT: &str = "Recursive test";

pub const CONFLICT_SOURCE_PATH: &str = "conflict.txt";
pub const CONFLICT_SOURCE_CONTENT: &str = "Original";

pub const CONFLICT_TARGET_PATH: &str = "target/conflict.txt";
pub const CONFLICT_TARGET_CONTENT: &str = "Existing target file";

pub const RENAME_BASE_PATH: &str = "target_rename/conflict.txt";
pub const RENAME_BASE_CONTENT: &str = "Any text for conflict.txt";
pub const RENAME_FIRST_PATH: &str = "target_rename/conflict_1.txt";
pub const RENAME_FIRST_CONTENT: &str = "Any text for conflict_1.txt";
pub const RENAME_SECOND_PATH: &str = "target_rename/conflict_2.txt";
pub const RENAME_SECOND_CONTENT: &str = "Any text for conflict_2.txt";

pub const DEFAULT_OUTPUT_ROOT: &str = ".";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const FILE_PREFIX: &str = "📝";
pub const DIR_PREFIX: &str = "📁";
pub const CHECK_PREFIX: &str = "🔍";
pub const SUMMARY_PREFIX: &str = "📊";
