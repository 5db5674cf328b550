//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Operations touching more than
//! one statement run inside a single transaction.

pub mod attendance_repo;
pub mod group_master_repo;
pub mod group_repo;
pub mod lesson_repo;
pub mod month_copy_repo;
pub mod month_view_repo;
pub mod score_repo;
pub mod score_title_repo;
pub mod student_master_repo;
pub mod student_repo;

pub use attendance_repo::AttendanceRepo;
pub use group_master_repo::GroupMasterRepo;
pub use group_repo::GroupRepo;
pub use lesson_repo::LessonRepo;
pub use month_copy_repo::MonthCopyRepo;
pub use month_view_repo::MonthViewRepo;
pub use score_repo::ScoreRepo;
pub use score_title_repo::ScoreTitleRepo;
pub use student_master_repo::StudentMasterRepo;
pub use student_repo::StudentRepo;
