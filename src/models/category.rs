use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of categories a record can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Learning,
    Health,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Learning,
        Category::Health,
    ];

    /// Returns the capitalized display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Learning => "Learning",
            Self::Health => "Health",
        }
    }

    /// Looks up a category by its exact name.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifeorg::Category;
    ///
    /// assert_eq!(Category::from_name("Work"), Some(Category::Work));
    /// assert_eq!(Category::from_name("work"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
