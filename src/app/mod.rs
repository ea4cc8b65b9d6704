pub mod ports;
pub mod attendance_use_case;

pub use attendance_use_case::AttendanceService;
