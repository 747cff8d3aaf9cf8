//! Aggregates over categorical record collections.
//!
//! Every helper is total: an empty collection yields `None` for percentages,
//! maxima and averages instead of dividing by zero.

use serde::Serialize;

use crate::models::{BadgeTone, Category};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryCount<C> {
    pub category: C,
    pub badge: BadgeTone,
    pub count: usize,
    /// `round(100 * count / total)`, `None` when the collection is empty.
    pub percentage: Option<u32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Breakdown<C> {
    pub total: usize,
    pub categories: Vec<CategoryCount<C>>,
}

impl<C: Category> Breakdown<C> {
    pub fn count(&self, category: C) -> usize {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

/// Rounded integer share of `count` in `total`.
pub fn percentage(count: usize, total: usize) -> Option<u32> {
    if total == 0 {
        return None;
    }
    Some((100.0 * count as f64 / total as f64).round() as u32)
}

/// Counts records per category value, in `C::ALL` order, zero counts included.
pub fn breakdown<T, C: Category>(records: &[T], key: impl Fn(&T) -> C) -> Breakdown<C> {
    let total = records.len();
    let categories = C::ALL
        .iter()
        .map(|&category| {
            let count = records.iter().filter(|r| key(r) == category).count();
            CategoryCount {
                category,
                badge: category.badge(),
                count,
                percentage: percentage(count, total),
            }
        })
        .collect();

    Breakdown { total, categories }
}

pub fn max_of<T>(records: &[T], field: impl Fn(&T) -> f64) -> Option<f64> {
    records.iter().map(field).reduce(f64::max)
}

pub fn average_of<T>(records: &[T], field: impl Fn(&T) -> f64) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(field).sum();
    Some(sum / records.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::ApplicationStatus;

    fn statuses(list: &[ApplicationStatus]) -> Vec<ApplicationStatus> {
        list.to_vec()
    }

    #[test]
    fn test_counts_sum_to_total() {
        let records = statuses(&[
            ApplicationStatus::Applied,
            ApplicationStatus::Applied,
            ApplicationStatus::Offer,
            ApplicationStatus::Rejected,
            ApplicationStatus::Interviewing,
            ApplicationStatus::Applied,
            ApplicationStatus::Screening,
        ]);
        let b = breakdown(&records, |s| *s);
        assert_eq!(b.total, 7);
        let sum: usize = b.categories.iter().map(|c| c.count).sum();
        assert_eq!(sum, 7);
        assert_eq!(b.count(ApplicationStatus::Applied), 3);
    }

    #[test]
    fn test_percentages_are_rounded_shares() {
        let records = statuses(&[
            ApplicationStatus::Applied,
            ApplicationStatus::Applied,
            ApplicationStatus::Offer,
        ]);
        let b = breakdown(&records, |s| *s);
        let applied = &b.categories[0];
        assert_eq!(applied.category, ApplicationStatus::Applied);
        // 200 / 3 = 66.67
        assert_eq!(applied.percentage, Some(67));
        let offer = b
            .categories
            .iter()
            .find(|c| c.category == ApplicationStatus::Offer)
            .unwrap();
        assert_eq!(offer.percentage, Some(33));
    }

    #[test]
    fn test_absent_categories_report_zero() {
        let records = statuses(&[ApplicationStatus::Offer]);
        let b = breakdown(&records, |s| *s);
        assert_eq!(b.categories.len(), ApplicationStatus::ALL.len());
        assert_eq!(b.count(ApplicationStatus::Rejected), 0);
        assert_eq!(b.categories[4].percentage, Some(0));
    }

    #[test]
    fn test_empty_collection_is_guarded() {
        let b = breakdown(&[] as &[ApplicationStatus], |s| *s);
        assert_eq!(b.total, 0);
        assert!(b.categories.iter().all(|c| c.percentage.is_none()));
        assert_eq!(percentage(0, 0), None);
        assert_eq!(max_of(&[] as &[u8], |v| *v as f64), None);
        assert_eq!(average_of(&[] as &[u8], |v| *v as f64), None);
    }

    #[test]
    fn test_breakdown_carries_badges() {
        let b = breakdown(&[ApplicationStatus::Offer], |s| *s);
        let offer = b
            .categories
            .iter()
            .find(|c| c.category == ApplicationStatus::Offer)
            .unwrap();
        assert_eq!(offer.badge, BadgeTone::Success);
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(percentage(1, 8), Some(13)); // 12.5
        assert_eq!(percentage(1, 200), Some(1)); // 0.5
    }

    #[test]
    fn test_max_and_average() {
        let scores = [92u8, 78, 64];
        assert_eq!(max_of(&scores, |s| *s as f64), Some(92.0));
        let avg = average_of(&scores, |s| *s as f64).unwrap();
        assert!((avg - 78.0).abs() < f64::EPSILON, "Average was {avg}");
    }
}
