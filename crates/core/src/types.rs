/// All database primary keys are SQLite INTEGER rowids.
pub type DbId = i64;

/// Per-lesson tuition fee and derived billing amounts, in the smallest
/// currency unit.
pub type Money = i64;
