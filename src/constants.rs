/// Source file and column name constants shared by both participant groups.
/// The two source files were produced independently, so their header
/// spellings differ even where the columns mean the same thing.

// Default locations of the source files, relative to the public directory / base URL
pub const GROUP_A_PATH: &str = "/male_attendance.csv";
pub const GROUP_B_PATH: &str = "/ladies_attendance.csv";

// Group A headers
pub const GROUP_A_IDENTIFIER_COLUMN: &str = "Roll no";
pub const GROUP_A_PORTRAIT_COLUMN: &str = "profileImage";

// Group B headers (note the capital N)
pub const GROUP_B_IDENTIFIER_COLUMN: &str = "Roll No";

// Shared headers
pub const NAME_COLUMN: &str = "Name";
pub const PERCENTAGE_COLUMN: &str = "Percentage";

/// Minimum unrounded attendance percentage required to sit the exam
pub const ELIGIBILITY_THRESHOLD: f64 = 80.0;

/// Generated avatar service used when a record carries no portrait
pub const PLACEHOLDER_PORTRAIT_BASE: &str = "https://ui-avatars.com/api/";

/// Exam start, Pakistan Standard Time
pub const EXAM_STARTS_AT: &str = "2025-04-27T10:30:00+05:00";

// Development server defaults
pub const DEFAULT_PORT: u16 = 5173;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_INDEX_FILE: &str = "index.html";
pub const DEFAULT_CONFIG_PATH: &str = "portal.toml";
