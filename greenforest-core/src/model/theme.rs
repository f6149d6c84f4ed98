//! Monthly theme recommendations.

use serde::{Deserialize, Serialize};

use crate::utils::new_id;

const MONTH_NAMES: [&str; 12] = [
    "一月 (Jan)",
    "二月 (Feb)",
    "三月 (Mar)",
    "四月 (Apr)",
    "五月 (May)",
    "六月 (Jun)",
    "七月 (Jul)",
    "八月 (Aug)",
    "九月 (Sep)",
    "十月 (Oct)",
    "十一月 (Nov)",
    "十二月 (Dec)",
];

/// Display name for month 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub recommend_location: String,
    pub images: Vec<String>,
}

impl ThemeItem {
    pub fn new(title: impl Into<String>) -> Self {
        ThemeItem {
            id: new_id(),
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Themes suggested for one month. At most one plan exists per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePlan {
    pub month: u32,
    #[serde(default)]
    pub themes: Vec<ThemeItem>,
}

/// Themes planned for `month`, empty when there is no plan.
pub fn themes_for(plans: &[ThemePlan], month: u32) -> &[ThemeItem] {
    plans
        .iter()
        .find(|p| p.month == month)
        .map(|p| p.themes.as_slice())
        .unwrap_or(&[])
}

/// Replace the theme with the same id in `month`'s plan, or append it.
/// Creates the plan when the month has none. Returns `None` for a month
/// outside 1..=12.
pub fn upsert_theme(plans: &[ThemePlan], month: u32, theme: ThemeItem) -> Option<Vec<ThemePlan>> {
    month_name(month)?;

    let mut updated = plans.to_vec();
    match updated.iter_mut().find(|p| p.month == month) {
        Some(plan) => match plan.themes.iter_mut().find(|t| t.id == theme.id) {
            Some(existing) => *existing = theme,
            None => plan.themes.push(theme),
        },
        None => updated.push(ThemePlan {
            month,
            themes: vec![theme],
        }),
    }

    Some(updated)
}

/// Remove theme `id` from `month`'s plan. Returns `None` when nothing matched.
pub fn remove_theme(plans: &[ThemePlan], month: u32, id: &str) -> Option<Vec<ThemePlan>> {
    let plan = plans.iter().find(|p| p.month == month)?;
    if !plan.themes.iter().any(|t| t.id == id) {
        return None;
    }

    Some(
        plans
            .iter()
            .map(|p| {
                if p.month == month {
                    ThemePlan {
                        month,
                        themes: p.themes.iter().filter(|t| t.id != id).cloned().collect(),
                    }
                } else {
                    p.clone()
                }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(id: &str, title: &str) -> ThemeItem {
        ThemeItem {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(month_name(1), Some("一月 (Jan)"));
        assert_eq!(month_name(12), Some("十二月 (Dec)"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn upsert_creates_plan_for_new_month() {
        let plans = vec![ThemePlan { month: 1, themes: vec![] }];
        let updated = upsert_theme(&plans, 4, theme("a", "雪柳花海")).unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(themes_for(&updated, 4).len(), 1);
        assert!(themes_for(&updated, 1).is_empty());
    }

    #[test]
    fn upsert_edits_in_place_by_id() {
        let plans = vec![ThemePlan {
            month: 3,
            themes: vec![theme("a", "old"), theme("b", "other")],
        }];
        let updated = upsert_theme(&plans, 3, theme("a", "new")).unwrap();

        let titles: Vec<_> = themes_for(&updated, 3).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "other"]);
    }

    #[test]
    fn upsert_appends_unknown_id() {
        let plans = vec![ThemePlan { month: 3, themes: vec![theme("a", "first")] }];
        let updated = upsert_theme(&plans, 3, theme("b", "second")).unwrap();

        assert_eq!(themes_for(&updated, 3).len(), 2);
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn upsert_rejects_invalid_month() {
        assert_eq!(upsert_theme(&[], 13, theme("a", "x")), None);
        assert_eq!(upsert_theme(&[], 0, theme("a", "x")), None);
    }

    #[test]
    fn remove_only_touches_matching_id() {
        let plans = vec![
            ThemePlan { month: 3, themes: vec![theme("a", "x"), theme("b", "y")] },
            ThemePlan { month: 4, themes: vec![theme("a", "z")] },
        ];
        let updated = remove_theme(&plans, 3, "a").unwrap();

        assert_eq!(themes_for(&updated, 3), &[theme("b", "y")]);
        assert_eq!(themes_for(&updated, 4).len(), 1);
        assert_eq!(remove_theme(&updated, 3, "a"), None);
        assert_eq!(remove_theme(&updated, 7, "b"), None);
    }
}
