//! Exclusion set model
//!
//! Foods the caller never wants to see: allergies and dislikes combined.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionSet {
    foods: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union of allergies and dislikes
    pub fn from_lists<A, D>(allergies: A, dislikes: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let mut set = Self::new();
        for food in allergies {
            set.insert(food);
        }
        for food in dislikes {
            set.insert(food);
        }
        set
    }

    pub fn insert(&mut self, food: impl Into<String>) {
        self.foods.insert(food.into());
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, food: &str) -> bool {
        self.foods.contains(food)
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.foods.iter().map(String::as_str)
    }

    /// Drop every occurrence of an excluded food, keeping the order of the rest
    pub fn filter(&self, foods: &mut Vec<String>) {
        if self.is_empty() {
            return;
        }
        foods.retain(|food| !self.contains(food));
    }
}
