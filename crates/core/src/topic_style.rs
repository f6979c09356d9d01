//! Display styling for projects and topics created on the user's behalf:
//! palette colors and keyword-derived category icons.

use rand::seq::IndexedRandom;

/// Icon used for a category when no keyword matches.
pub const DEFAULT_CATEGORY_ICON: &str = "tag";

/// Icon given to every project created by the importer.
pub const DEFAULT_PROJECT_ICON: &str = "folder";

/// Colors assigned to auto-created projects and categories.
pub const PALETTE: [&str; 12] = [
    "#4A90E2", "#50E3C2", "#F5A623", "#D0021B", "#9013FE", "#7ED321", "#BD10E0", "#F8E71C",
    "#417505", "#8B572A", "#FF6F61", "#2D9CDB",
];

/// Ordered keyword table for [`suggest_icon`].
///
/// Earlier rows win when several keywords occur in the same name, so more
/// specific topics are listed before broad ones like "công việc".
pub const ICON_KEYWORDS: &[(&str, &str)] = &[
    ("họp", "users"),
    ("meeting", "users"),
    ("lập trình", "code"),
    ("code", "code"),
    ("dev", "code"),
    ("phát triển", "code"),
    ("học", "book"),
    ("study", "book"),
    ("marketing", "megaphone"),
    ("quảng cáo", "megaphone"),
    ("tài chính", "dollar-sign"),
    ("finance", "dollar-sign"),
    ("sức khỏe", "heart"),
    ("health", "heart"),
    ("mua sắm", "shopping-cart"),
    ("shopping", "shopping-cart"),
    ("du lịch", "plane"),
    ("travel", "plane"),
    ("thiết kế", "pen-tool"),
    ("design", "pen-tool"),
    ("email", "mail"),
    ("gia đình", "home"),
    ("family", "home"),
    ("công việc", "briefcase"),
    ("work", "briefcase"),
];

/// Pick an icon id for a topic name by case-insensitive substring match
/// against [`ICON_KEYWORDS`], falling back to [`DEFAULT_CATEGORY_ICON`].
pub fn suggest_icon(topic_name: &str) -> &'static str {
    let folded = topic_name.to_lowercase();
    ICON_KEYWORDS
        .iter()
        .find(|(keyword, _)| folded.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_CATEGORY_ICON)
}

/// Uniform-random pick from [`PALETTE`].
pub fn random_color() -> &'static str {
    PALETTE
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(PALETTE[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_keyword_in_table_order_wins() {
        assert_eq!(suggest_icon("Họp nhóm marketing"), "users");
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(suggest_icon("MARKETING Q3"), "megaphone");
        assert_eq!(suggest_icon("Lập Trình Rust"), "code");
    }

    #[test]
    fn substring_match_inside_words() {
        assert_eq!(suggest_icon("Backend development"), "code");
    }

    #[test]
    fn unknown_topic_gets_default_icon() {
        assert_eq!(suggest_icon("Linh tinh"), DEFAULT_CATEGORY_ICON);
        assert_eq!(suggest_icon(""), DEFAULT_CATEGORY_ICON);
    }

    #[test]
    fn keywords_are_stored_lowercase() {
        for (keyword, _) in ICON_KEYWORDS {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn random_color_comes_from_palette() {
        for _ in 0..50 {
            assert!(PALETTE.contains(&random_color()));
        }
    }
}
