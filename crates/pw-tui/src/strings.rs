//! User-facing labels in Japanese and English.
//!
//! Mirrors [`Theme`](crate::Theme): one struct, one constructor per variant.

use chrono::NaiveDateTime;
use pw_core::{Category, Locale, TimeRange};

/// Every label the dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    /// Which language these labels are in.
    pub locale: Locale,
    /// Dashboard title.
    pub title: &'static str,
    /// Search field placeholder.
    pub search_placeholder: &'static str,
    /// Search field title.
    pub search_title: &'static str,
    /// Static message shown when the load failed.
    pub load_failed: &'static str,
    /// Empty-state message.
    pub no_results: &'static str,
    /// Trend panel title.
    pub chart_title: &'static str,
    /// Trend panel hint when nothing is selected.
    pub chart_hint: &'static str,
    /// Trend panel note for single-point histories.
    pub chart_single_point: &'static str,
    /// Label before the last-updated date.
    pub last_updated: &'static str,
    /// Label before the highest point value.
    pub peak: &'static str,
    /// Label before the lowest point value.
    pub trough: &'static str,
    /// Campaign list title.
    pub list_title: &'static str,
    /// Help panel title.
    pub help_title: &'static str,
    /// Status bar hint in normal mode.
    pub key_hint: &'static str,
    /// Status bar hint while searching.
    pub search_hint: &'static str,
    /// Status bar hint after a failed load.
    pub failed_hint: &'static str,
    /// Header text while loading.
    pub loading: &'static str,
    all_categories: &'static str,
    credit: &'static str,
    shopping: &'static str,
    service: &'static str,
    week: &'static str,
    month: &'static str,
    quarter: &'static str,
    all_time: &'static str,
}

impl Strings {
    /// Japanese labels.
    #[must_use]
    pub const fn ja() -> Self {
        Self {
            locale: Locale::Ja,
            title: "ハピタス案件価格推移",
            search_placeholder: "案件を検索...",
            search_title: "検索",
            load_failed: "データの取得に失敗しました",
            no_results: "案件が見つかりませんでした",
            chart_title: "価格推移グラフ",
            chart_hint: "案件を選択してください (Enter)",
            chart_single_point: "履歴が1件のみです",
            last_updated: "最終更新",
            peak: "最高値",
            trough: "最安値",
            list_title: "案件一覧",
            help_title: "ヘルプ",
            key_hint: "/ 検索  c カテゴリー  t 期間  Enter 選択  ? ヘルプ  q 終了",
            search_hint: "Enter 確定  Esc 取消",
            failed_hint: "? ヘルプ  q 終了",
            loading: "読み込み中...",
            all_categories: "全てのカテゴリー",
            credit: "クレジットカード",
            shopping: "ショッピング",
            service: "サービス登録",
            week: "1週間",
            month: "1ヶ月",
            quarter: "3ヶ月",
            all_time: "全期間",
        }
    }

    /// English labels.
    #[must_use]
    pub const fn en() -> Self {
        Self {
            locale: Locale::En,
            title: "Point Campaign Trends",
            search_placeholder: "Search campaigns...",
            search_title: "Search",
            load_failed: "Failed to load campaign data",
            no_results: "No campaigns found",
            chart_title: "Point History",
            chart_hint: "Select a campaign (Enter)",
            chart_single_point: "Only one observation",
            last_updated: "Updated",
            peak: "High",
            trough: "Low",
            list_title: "Campaigns",
            help_title: "Help",
            key_hint: "/ search  c category  t range  Enter select  ? help  q quit",
            search_hint: "Enter confirm  Esc cancel",
            failed_hint: "? help  q quit",
            loading: "Loading...",
            all_categories: "All categories",
            credit: "Credit cards",
            shopping: "Shopping",
            service: "Services",
            week: "1 week",
            month: "1 month",
            quarter: "3 months",
            all_time: "All time",
        }
    }

    /// Labels for a locale.
    #[must_use]
    pub const fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ja => Self::ja(),
            Locale::En => Self::en(),
        }
    }

    /// Label for a category selector value. `None` is "all".
    #[must_use]
    pub const fn category(&self, category: Option<Category>) -> &'static str {
        match category {
            None => self.all_categories,
            Some(Category::Credit) => self.credit,
            Some(Category::Shopping) => self.shopping,
            Some(Category::Service) => self.service,
        }
    }

    /// Label for a time-range selector value.
    #[must_use]
    pub const fn range(&self, range: TimeRange) -> &'static str {
        match range {
            TimeRange::Week => self.week,
            TimeRange::Month => self.month,
            TimeRange::Quarter => self.quarter,
            TimeRange::All => self.all_time,
        }
    }

    /// Formats a date the way the locale writes it.
    #[must_use]
    pub fn date(&self, timestamp: NaiveDateTime) -> String {
        let format = match self.locale {
            Locale::Ja => "%Y/%-m/%-d",
            Locale::En => "%Y-%m-%d",
        };
        timestamp.format(format).to_string()
    }

    /// Status message after a successful load.
    #[must_use]
    pub fn loaded(&self, count: usize) -> String {
        match self.locale {
            Locale::Ja => format!("{count}件の案件を読み込みました"),
            Locale::En => format!("Loaded {count} campaigns"),
        }
    }

    /// Count shown in the list title: visible of total.
    #[must_use]
    pub fn count(&self, visible: usize, total: usize) -> String {
        match self.locale {
            Locale::Ja => format!("{visible}/{total}件"),
            Locale::En => format!("{visible}/{total}"),
        }
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::ja()
    }
}
