//! Task priority/status vocabulary and the AI-to-domain label mappers.
//!
//! The AI service speaks a three-level English vocabulary (`Low`, `Medium`,
//! `High`); tasks are stored and displayed with the Vietnamese domain labels
//! below. Both mappers are total: every input yields a label.

use serde::{Deserialize, Serialize};

// ── Priority ─────────────────────────────────────────────────────────

pub const PRIORITY_LOW: &str = "Thấp";
pub const PRIORITY_MEDIUM: &str = "Trung bình";
pub const PRIORITY_HIGH: &str = "Cao";
pub const PRIORITY_URGENT: &str = "Khẩn cấp";

/// Domain task priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    #[serde(rename = "Thấp")]
    Low,
    #[default]
    #[serde(rename = "Trung bình")]
    Medium,
    #[serde(rename = "Cao")]
    High,
    #[serde(rename = "Khẩn cấp")]
    Urgent,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => PRIORITY_LOW,
            Self::Medium => PRIORITY_MEDIUM,
            Self::High => PRIORITY_HIGH,
            Self::Urgent => PRIORITY_URGENT,
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an AI priority label to the domain priority.
///
/// Accepts the AI vocabulary (`Low`/`Medium`/`High`, any casing) and the
/// domain labels themselves, since some analyzer versions already answer in
/// Vietnamese. Anything else, including `None`, maps to [`TaskPriority::Medium`].
pub fn map_priority(label: Option<&str>) -> TaskPriority {
    let Some(label) = label else {
        return TaskPriority::Medium;
    };
    let folded = label.trim().to_lowercase();

    match folded.as_str() {
        "low" => TaskPriority::Low,
        "medium" => TaskPriority::Medium,
        "high" => TaskPriority::High,
        "urgent" => TaskPriority::Urgent,
        other if other == PRIORITY_LOW.to_lowercase() => TaskPriority::Low,
        other if other == PRIORITY_HIGH.to_lowercase() => TaskPriority::High,
        other if other == PRIORITY_URGENT.to_lowercase() => TaskPriority::Urgent,
        _ => TaskPriority::Medium,
    }
}

// ── Status ───────────────────────────────────────────────────────────

pub const STATUS_NOT_STARTED: &str = "Chưa bắt đầu";
pub const STATUS_IN_PROGRESS: &str = "Đang làm";
pub const STATUS_DONE: &str = "Hoàn thành";
pub const STATUS_PAUSED: &str = "Tạm dừng";

/// Domain task status. Imported tasks always start as `NotStarted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Chưa bắt đầu")]
    NotStarted,
    #[serde(rename = "Đang làm")]
    InProgress,
    #[serde(rename = "Hoàn thành")]
    Done,
    #[serde(rename = "Tạm dừng")]
    Paused,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => STATUS_NOT_STARTED,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Done => STATUS_DONE,
            Self::Paused => STATUS_PAUSED,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Time labels ──────────────────────────────────────────────────────

/// Render an estimated duration in minutes as a Vietnamese label.
///
/// ```
/// use taskmind_core::task_vocab::format_minutes;
///
/// assert_eq!(format_minutes(45), "45 phút");
/// assert_eq!(format_minutes(60), "1 giờ");
/// assert_eq!(format_minutes(90), "1 giờ 30 phút");
/// ```
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} phút");
    }

    let hours = minutes / 60;
    let rem = minutes % 60;
    if rem == 0 {
        format!("{hours} giờ")
    } else {
        format!("{hours} giờ {rem} phút")
    }
}
