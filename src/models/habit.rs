use serde::{Deserialize, Serialize};

/// A tracked habit as persisted by the data service. `frequency`
/// holds the encoded recurrence string; `icon` is a free-text glyph
/// key resolved by the rendering layer and never inspected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub icon: String,
    pub goal_count: i64,
    pub memo: String,
    pub tag_id: Option<String>,
    pub frequency: String,
}

impl Default for Habit {
    fn default() -> Self {
        Self {
            id: String::new(),
            user_id: String::new(),
            name: String::new(),
            icon: "Target".to_string(),
            goal_count: 1,
            memo: String::new(),
            tag_id: None,
            frequency: "daily".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Tag {
    pub id: String,
    pub user_id: String,
    pub name: String,
}
