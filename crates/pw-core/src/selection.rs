//! Which campaign the trend panel shows.

use crate::types::CampaignId;

/// Selection state: nothing, or exactly one campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// No campaign selected.
    #[default]
    None,
    /// One campaign selected.
    Selected(CampaignId),
}

impl Selection {
    /// Chooses a campaign.
    ///
    /// Choosing a different campaign replaces the selection; choosing the
    /// selected one again clears it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pw_core::{CampaignId, Selection};
    ///
    /// let mut selection = Selection::default();
    /// selection.toggle(CampaignId::new(1));
    /// selection.toggle(CampaignId::new(2));
    /// assert_eq!(selection.id(), Some(CampaignId::new(2)));
    ///
    /// selection.toggle(CampaignId::new(2));
    /// assert_eq!(selection.id(), None);
    /// ```
    pub fn toggle(&mut self, id: CampaignId) {
        *self = if self.is_selected(id) {
            Self::None
        } else {
            Self::Selected(id)
        };
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        *self = Self::None;
    }

    /// Returns the selected id.
    #[inline]
    #[must_use]
    pub const fn id(self) -> Option<CampaignId> {
        match self {
            Self::None => None,
            Self::Selected(id) => Some(id),
        }
    }

    /// Returns `true` if `id` is the selected campaign.
    #[inline]
    #[must_use]
    pub fn is_selected(self, id: CampaignId) -> bool {
        self.id() == Some(id)
    }
}
