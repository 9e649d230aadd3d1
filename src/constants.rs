// ABOUTME: Fixed constants shared by the personalization engines
// ABOUTME: Service identity for structured logs and macronutrient energy densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service names for structured logging
pub mod service_names {
    /// Default service name reported in log records
    pub const FITPLAN_ENGINE: &str = "fitplan-engine";
}

/// Energy content of macronutrients (Atwater factors)
pub mod energy_density {
    /// Protein kcal per gram
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate kcal per gram
    pub const CARB_KCAL_PER_G: f64 = 4.0;
    /// Fat kcal per gram
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Meal analysis
pub mod meal_analysis {
    /// User-facing message when a model response cannot be normalized
    pub const ANALYSIS_FAILED_MESSAGE: &str =
        "Não foi possível analisar a imagem. Tente novamente.";
}
