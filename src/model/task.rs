use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task grouping. A fixed, closed set — not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Urgent,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Urgent,
        Category::Other,
    ];

    /// Stable identifier, as persisted and as accepted on the CLI.
    pub fn id(self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Urgent => "urgent",
            Category::Other => "other",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Urgent => "Urgent",
            Category::Other => "Other",
        }
    }

    /// Parse a category identifier.
    pub fn from_id(s: &str) -> Option<Category> {
        match s {
            "work" => Some(Category::Work),
            "personal" => Some(Category::Personal),
            "urgent" => Some(Category::Urgent),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// The next category in display order, wrapping around.
    pub fn next(self) -> Category {
        match self {
            Category::Work => Category::Personal,
            Category::Personal => Category::Urgent,
            Category::Urgent => Category::Other,
            Category::Other => Category::Work,
        }
    }
}

/// A single task record.
///
/// Serializes to the persisted wire shape: `id` (number), `text`, `completed`,
/// `category` (one of the four identifiers), `createdAt` (ISO-8601 string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique, monotonically increasing creation stamp (milliseconds).
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub category: Category,
    /// Informational only; never mutated after creation.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new, not-yet-completed task.
    pub fn new(id: i64, text: String, category: Category, created_at: DateTime<Utc>) -> Self {
        Task {
            id,
            text,
            completed: false,
            category,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn category_id_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_id(cat.id()), Some(cat));
        }
        assert_eq!(Category::from_id("chores"), None);
        assert_eq!(Category::from_id(""), None);
    }

    #[test]
    fn category_next_cycles_through_all() {
        let mut cat = Category::Work;
        for expected in [
            Category::Personal,
            Category::Urgent,
            Category::Other,
            Category::Work,
        ] {
            cat = cat.next();
            assert_eq!(cat, expected);
        }
    }

    #[test]
    fn task_serializes_to_wire_shape() {
        let task = Task::new(
            1754560800000,
            "Buy milk".into(),
            Category::Personal,
            Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap(),
        );
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], 1754560800000i64);
        assert_eq!(value["text"], "Buy milk");
        assert_eq!(value["completed"], false);
        assert_eq!(value["category"], "personal");
        // camelCase key, ISO-8601 value
        let created = value["createdAt"].as_str().unwrap();
        assert!(created.starts_with("2026-08-07T10:00:00"));
    }

    #[test]
    fn task_deserializes_from_js_style_timestamp() {
        // Millisecond-precision "Z" suffix, as Date.toISOString emits
        let json = r#"{"id":1736929800000,"text":"Fix bug","completed":true,"category":"work","createdAt":"2025-01-15T09:30:00.000Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 1736929800000);
        assert_eq!(task.text, "Fix bug");
        assert!(task.completed);
        assert_eq!(task.category, Category::Work);
        assert_eq!(
            task.created_at,
            Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn unknown_category_fails_to_deserialize() {
        let json = r#"{"id":1,"text":"x","completed":false,"category":"errands","createdAt":"2025-01-15T09:30:00Z"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }
}
