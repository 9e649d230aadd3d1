// ABOUTME: Meal photo analysis result with per-item nutrition and recomputed totals
// ABOUTME: Totals are derived from the items at construction and cannot be set directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// One food detected in the photo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealItem {
    /// Food name
    #[serde(rename = "nome")]
    pub name: String,
    /// Energy (kcal)
    #[serde(rename = "calorias")]
    pub calories: f64,
    /// Protein (g)
    #[serde(rename = "proteinas")]
    pub protein_g: f64,
    /// Carbohydrates (g)
    #[serde(rename = "carboidratos")]
    pub carbs_g: f64,
    /// Fat (g)
    #[serde(rename = "gorduras")]
    pub fat_g: f64,
}

/// Aggregate nutrition over all items
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MealTotals {
    /// Sum of item calories
    #[serde(rename = "caloriasTotais")]
    pub calories: f64,
    /// Sum of item protein
    #[serde(rename = "proteinasTotais")]
    pub protein_g: f64,
    /// Sum of item carbohydrates
    #[serde(rename = "carboidratosTotais")]
    pub carbs_g: f64,
    /// Sum of item fat
    #[serde(rename = "gordurasTotais")]
    pub fat_g: f64,
}

impl MealTotals {
    /// Sum items in order
    #[must_use]
    pub fn sum(items: &[MealItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            calories: acc.calories + item.calories,
            protein_g: acc.protein_g + item.protein_g,
            carbs_g: acc.carbs_g + item.carbs_g,
            fat_g: acc.fat_g + item.fat_g,
        })
    }
}

/// Normalized meal analysis, returned to the user for confirmation
///
/// Only built through [`MealAnalysisResult::from_items`], so the totals always
/// equal the sum of the items. Deliberately not `Deserialize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealAnalysisResult {
    #[serde(rename = "itens")]
    items: Vec<MealItem>,
    #[serde(flatten)]
    totals: MealTotals,
}

impl MealAnalysisResult {
    /// Build a result, computing totals from `items`
    #[must_use]
    pub fn from_items(items: Vec<MealItem>) -> Self {
        let totals = MealTotals::sum(&items);
        Self { items, totals }
    }

    /// Detected items
    #[must_use]
    pub fn items(&self) -> &[MealItem] {
        &self.items
    }

    /// Totals over all items
    #[must_use]
    pub const fn totals(&self) -> &MealTotals {
        &self.totals
    }

    /// Consume the result, keeping the items
    #[must_use]
    pub fn into_items(self) -> Vec<MealItem> {
        self.items
    }
}
