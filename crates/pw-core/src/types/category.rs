//! Campaign categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of offer a campaign represents.
///
/// # Examples
///
/// ```
/// use pw_core::Category;
///
/// let category: Category = "credit".parse().unwrap();
/// assert_eq!(category, Category::Credit);
/// assert_eq!(category.as_str(), "credit");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Credit card sign-ups.
    Credit,
    /// Shopping through a partner store.
    Shopping,
    /// Service registrations and subscriptions.
    Service,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Self; 3] = [Self::Credit, Self::Shopping, Self::Service];

    /// Returns the wire name of this category.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Shopping => "shopping",
            Self::Service => "service",
        }
    }

    /// Cycles a category selector: all → credit → shopping → service → all.
    ///
    /// `None` stands for "all categories".
    ///
    /// # Examples
    ///
    /// ```
    /// use pw_core::Category;
    ///
    /// assert_eq!(Category::cycle(None), Some(Category::Credit));
    /// assert_eq!(Category::cycle(Some(Category::Service)), None);
    /// ```
    #[must_use]
    pub const fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Credit),
            Some(Self::Credit) => Some(Self::Shopping),
            Some(Self::Shopping) => Some(Self::Service),
            Some(Self::Service) => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(Self::Credit),
            "shopping" => Ok(Self::Shopping),
            "service" => Ok(Self::Service),
            _ => Err(UnknownCategory(s.to_owned())),
        }
    }
}
