// src/filters.rs
//! Listing filter state and the fixed filter choices offered to users

use serde::{Deserialize, Serialize};

use crate::types::{Domain, GetPostsParams, Order, PositionType};

/// Group of positions that can be toggled together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub values: &'static [PositionType],
}

pub static POSITION_CATEGORIES: [PositionCategory; 4] = [
    PositionCategory {
        key: "DEV",
        label: "개발",
        values: &[
            PositionType::Front,
            PositionType::App,
            PositionType::Backend,
            PositionType::Data,
            PositionType::Others,
        ],
    },
    PositionCategory {
        key: "DESIGN",
        label: "디자인",
        values: &[PositionType::Design],
    },
    PositionCategory {
        key: "PLANNER",
        label: "기획",
        values: &[PositionType::Planner],
    },
    PositionCategory {
        key: "MARKETING",
        label: "마케팅",
        values: &[PositionType::Marketing],
    },
];

pub static ORDER_OPTIONS: [(Order, &str); 2] = [(Order::Latest, "최신순"), (Order::Deadline, "마감일순")];

pub fn find_category(key: &str) -> Option<&'static PositionCategory> {
    POSITION_CATEGORIES
        .iter()
        .find(|c| c.key.eq_ignore_ascii_case(key.trim()))
}

pub fn order_label(order: Order) -> &'static str {
    ORDER_OPTIONS
        .iter()
        .find(|(o, _)| *o == order)
        .map(|(_, label)| *label)
        .unwrap_or("최신순")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub positions: Vec<PositionType>,
    pub is_active: bool,
    pub order: Order,
    pub domains: Vec<Domain>,
}

impl FilterState {
    pub fn toggle_position(&mut self, position: PositionType) {
        toggle(&mut self.positions, position);
    }

    pub fn toggle_domain(&mut self, domain: Domain) {
        toggle(&mut self.domains, domain);
    }

    /// Deselect the whole category if it is fully selected, otherwise select all of it
    pub fn toggle_category(&mut self, category: &PositionCategory) {
        let all_selected = category
            .values
            .iter()
            .all(|v| self.positions.contains(v));

        self.positions.retain(|p| !category.values.contains(p));
        if !all_selected {
            self.positions.extend_from_slice(category.values);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_position_filter(&self) -> bool {
        !self.positions.is_empty()
    }

    pub fn has_domain_filter(&self) -> bool {
        !self.domains.is_empty()
    }

    pub fn has_status_filter(&self) -> bool {
        self.is_active
    }

    pub fn has_order_filter(&self) -> bool {
        self.order != Order::Latest
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_params(&self, page: u32) -> GetPostsParams {
        GetPostsParams {
            positions: non_empty(&self.positions),
            is_active: self.is_active.then_some(true),
            domains: non_empty(&self.domains),
            order: Some(self.order),
            page: Some(page),
        }
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(idx) = items.iter().position(|i| *i == item) {
        items.remove(idx);
    } else {
        items.push(item);
    }
}

fn non_empty<T: Clone>(items: &[T]) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_position_adds_then_removes() {
        let mut filters = FilterState::default();
        filters.toggle_position(PositionType::Front);
        assert_eq!(filters.positions, vec![PositionType::Front]);
        filters.toggle_position(PositionType::Front);
        assert!(!filters.has_position_filter());
    }

    #[test]
    fn test_toggle_category_selects_missing_members() {
        let dev = find_category("dev").unwrap();
        let mut filters = FilterState {
            positions: vec![PositionType::Design, PositionType::App],
            ..Default::default()
        };

        filters.toggle_category(dev);
        assert_eq!(
            filters.positions,
            vec![
                PositionType::Design,
                PositionType::Front,
                PositionType::App,
                PositionType::Backend,
                PositionType::Data,
                PositionType::Others,
            ]
        );

        filters.toggle_category(dev);
        assert_eq!(filters.positions, vec![PositionType::Design]);
    }

    #[test]
    fn test_to_params_omits_inactive_filters() {
        let params = FilterState::default().to_params(0);
        assert_eq!(params.positions, None);
        assert_eq!(params.is_active, None);
        assert_eq!(params.domains, None);
        assert_eq!(params.order, Some(Order::Latest));
        assert_eq!(params.page, Some(0));
    }

    #[test]
    fn test_reset_and_flags() {
        let mut filters = FilterState {
            positions: vec![PositionType::Data],
            is_active: true,
            order: Order::Deadline,
            domains: vec![Domain::Fintech],
        };
        assert!(filters.has_status_filter());
        assert!(filters.has_order_filter());
        assert!(filters.has_domain_filter());

        filters.reset();
        assert!(filters.is_default());
    }
}
