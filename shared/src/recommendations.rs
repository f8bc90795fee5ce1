//! Category-keyed recommendation tables
//!
//! Diet, exercise and lifestyle guidance are fixed text bundles keyed by BMI
//! category. The tables are built once and never mutated; goal adjustments
//! are applied to an owned copy.
//!
//! Two lookup shapes are provided:
//! - typed (`diet_recommendations`, ...) used by [`crate::compute`]
//! - string-keyed (`get_diet_recommendations`, ...) that never fail and
//!   fall back to the `normal` bundle for unknown categories

use crate::health_metrics::{ActivityLevel, BmiCategory};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Diet `calories` text used when the goal is weight loss
pub const WEIGHT_LOSS_CALORIES: &str = "Create a 500-750 calorie deficit";

/// Diet `calories` text used when the goal is muscle gain
pub const MUSCLE_GAIN_CALORIES: &str = "Increase calories by 300-500 per day";

/// Diet `protein` text used when the goal is muscle gain
pub const MUSCLE_GAIN_PROTEIN: &str = "1.6-2.2g protein per kg body weight";

// ============================================================================
// Goal
// ============================================================================

/// User-stated objective, modulates diet recommendations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    GeneralHealth,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Maintenance,
        Goal::GeneralHealth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Maintenance => "maintenance",
            Goal::GeneralHealth => "general_health",
        }
    }

    /// Resolve an optional textual goal; unknown text means no goal
    pub fn lookup(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| v.parse().ok())
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight_loss" => Ok(Goal::WeightLoss),
            "muscle_gain" => Ok(Goal::MuscleGain),
            "maintenance" => Ok(Goal::Maintenance),
            "general_health" => Ok(Goal::GeneralHealth),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Bundles
// ============================================================================

/// Nutrition guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRecommendations {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub meals: String,
}

/// Training guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecommendations {
    pub cardio: String,
    pub strength: String,
    pub duration: String,
    pub intensity: String,
}

/// Sleep, stress, hydration and habit guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleRecommendations {
    pub sleep: String,
    pub stress: String,
    pub hydration: String,
    pub habits: String,
}

/// All three bundles for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub diet: DietRecommendations,
    pub exercise: ExerciseRecommendations,
    pub lifestyle: LifestyleRecommendations,
}

impl DietRecommendations {
    fn new(calories: &str, protein: &str, carbs: &str, fats: &str, meals: &str) -> Self {
        Self {
            calories: calories.to_string(),
            protein: protein.to_string(),
            carbs: carbs.to_string(),
            fats: fats.to_string(),
            meals: meals.to_string(),
        }
    }

    /// Apply goal-specific overrides, returning a new bundle
    pub fn with_goal(self, goal: Option<Goal>) -> Self {
        match goal {
            Some(Goal::WeightLoss) => Self {
                calories: WEIGHT_LOSS_CALORIES.to_string(),
                ..self
            },
            Some(Goal::MuscleGain) => Self {
                calories: MUSCLE_GAIN_CALORIES.to_string(),
                protein: MUSCLE_GAIN_PROTEIN.to_string(),
                ..self
            },
            Some(Goal::Maintenance) | Some(Goal::GeneralHealth) | None => self,
        }
    }
}

impl ExerciseRecommendations {
    fn new(cardio: &str, strength: &str, duration: &str, intensity: &str) -> Self {
        Self {
            cardio: cardio.to_string(),
            strength: strength.to_string(),
            duration: duration.to_string(),
            intensity: intensity.to_string(),
        }
    }
}

impl LifestyleRecommendations {
    fn new(sleep: &str, stress: &str, hydration: &str, habits: &str) -> Self {
        Self {
            sleep: sleep.to_string(),
            stress: stress.to_string(),
            hydration: hydration.to_string(),
            habits: habits.to_string(),
        }
    }
}

// ============================================================================
// Tables
// ============================================================================

/// One entry per BMI category; lookups are total
struct CategoryTable<T> {
    underweight: T,
    normal: T,
    overweight: T,
    obese: T,
}

impl<T> CategoryTable<T> {
    fn get(&self, category: BmiCategory) -> &T {
        match category {
            BmiCategory::Underweight => &self.underweight,
            BmiCategory::Normal => &self.normal,
            BmiCategory::Overweight => &self.overweight,
            BmiCategory::Obese => &self.obese,
        }
    }
}

static DIET_TABLE: Lazy<CategoryTable<DietRecommendations>> = Lazy::new(|| CategoryTable {
    underweight: DietRecommendations::new(
        "Increase calorie intake by 500-1000 calories per day",
        "1.2-1.5g protein per kg body weight",
        "Focus on complex carbohydrates",
        "Include healthy fats from nuts, avocados, olive oil",
        "Eat 5-6 smaller meals throughout the day",
    ),
    normal: DietRecommendations::new(
        "Maintain current calorie intake",
        "1.0-1.2g protein per kg body weight",
        "45-65% of daily calories from carbohydrates",
        "20-35% of daily calories from healthy fats",
        "3 main meals with 1-2 snacks",
    ),
    overweight: DietRecommendations::new(
        "Create a 500-750 calorie deficit for weight loss",
        "1.2-1.5g protein per kg body weight",
        "Reduce refined carbohydrates",
        "Focus on healthy fats, limit saturated fats",
        "3 balanced meals, avoid late-night eating",
    ),
    obese: DietRecommendations::new(
        "Create a 750-1000 calorie deficit for weight loss",
        "1.5-2.0g protein per kg body weight",
        "Limit to 100-150g per day",
        "Focus on healthy fats, avoid trans fats",
        "Structured meal timing, portion control",
    ),
});

static EXERCISE_TABLE: Lazy<CategoryTable<ExerciseRecommendations>> = Lazy::new(|| CategoryTable {
    underweight: ExerciseRecommendations::new(
        "Light to moderate cardio 3-4 times per week",
        "Focus on strength training 3-4 times per week",
        "30-45 minutes per session",
        "Moderate intensity, avoid overtraining",
    ),
    normal: ExerciseRecommendations::new(
        "150 minutes moderate or 75 minutes vigorous cardio per week",
        "Strength training 2-3 times per week",
        "30-60 minutes per session",
        "Mix of moderate and vigorous intensity",
    ),
    overweight: ExerciseRecommendations::new(
        "200-300 minutes moderate cardio per week",
        "Strength training 2-3 times per week",
        "45-60 minutes per session",
        "Start with low-impact, gradually increase",
    ),
    obese: ExerciseRecommendations::new(
        "Start with walking, aim for 150 minutes per week",
        "Begin with bodyweight exercises",
        "Start with 10-15 minutes, gradually increase",
        "Low-impact activities, focus on consistency",
    ),
});

static LIFESTYLE_TABLE: Lazy<CategoryTable<LifestyleRecommendations>> = Lazy::new(|| CategoryTable {
    underweight: LifestyleRecommendations::new(
        "7-9 hours of quality sleep",
        "Manage stress through relaxation techniques",
        "Stay hydrated, drink 8-10 glasses of water daily",
        "Avoid smoking, limit alcohol consumption",
    ),
    normal: LifestyleRecommendations::new(
        "7-9 hours of quality sleep",
        "Regular stress management activities",
        "Drink 8-10 glasses of water daily",
        "Maintain healthy lifestyle habits",
    ),
    overweight: LifestyleRecommendations::new(
        "7-9 hours of quality sleep",
        "Practice stress management techniques",
        "Drink 10-12 glasses of water daily",
        "Limit processed foods, practice mindful eating",
    ),
    obese: LifestyleRecommendations::new(
        "7-9 hours of quality sleep",
        "Seek professional help for stress management",
        "Drink 12-16 glasses of water daily",
        "Work with healthcare provider for lifestyle changes",
    ),
});

// ============================================================================
// Typed Lookups
// ============================================================================

/// Diet bundle for a category, adjusted for the goal
pub fn diet_recommendations(category: BmiCategory, goal: Option<Goal>) -> DietRecommendations {
    DIET_TABLE.get(category).clone().with_goal(goal)
}

/// Exercise bundle for a category
///
/// The activity level is accepted for future tailoring and does not change
/// the result yet.
pub fn exercise_recommendations(
    category: BmiCategory,
    _activity_level: Option<ActivityLevel>,
) -> ExerciseRecommendations {
    EXERCISE_TABLE.get(category).clone()
}

/// Lifestyle bundle for a category
pub fn lifestyle_recommendations(category: BmiCategory) -> LifestyleRecommendations {
    LIFESTYLE_TABLE.get(category).clone()
}

/// All bundles for a category
pub fn recommendations_for(
    category: BmiCategory,
    goal: Option<Goal>,
    activity_level: Option<ActivityLevel>,
) -> Recommendations {
    Recommendations {
        diet: diet_recommendations(category, goal),
        exercise: exercise_recommendations(category, activity_level),
        lifestyle: lifestyle_recommendations(category),
    }
}

// ============================================================================
// String-Keyed Lookups
// ============================================================================

/// Diet bundle for a textual category and goal; never fails
pub fn get_diet_recommendations(category: &str, goal: Option<&str>) -> DietRecommendations {
    diet_recommendations(BmiCategory::lookup(category), Goal::lookup(goal))
}

/// Exercise bundle for a textual category; never fails
pub fn get_exercise_recommendations(
    category: &str,
    activity_level: Option<&str>,
) -> ExerciseRecommendations {
    exercise_recommendations(
        BmiCategory::lookup(category),
        activity_level.and_then(|level| level.parse().ok()),
    )
}

/// Lifestyle bundle for a textual category; never fails
pub fn get_lifestyle_recommendations(category: &str) -> LifestyleRecommendations {
    lifestyle_recommendations(BmiCategory::lookup(category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CATEGORIES: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    #[test]
    fn test_every_bundle_field_is_filled() {
        for category in CATEGORIES {
            let r = recommendations_for(category, None, None);
            for field in [
                &r.diet.calories,
                &r.diet.protein,
                &r.diet.carbs,
                &r.diet.fats,
                &r.diet.meals,
                &r.exercise.cardio,
                &r.exercise.strength,
                &r.exercise.duration,
                &r.exercise.intensity,
                &r.lifestyle.sleep,
                &r.lifestyle.stress,
                &r.lifestyle.hydration,
                &r.lifestyle.habits,
            ] {
                assert!(!field.is_empty(), "empty field for {}", category);
            }
        }
    }

    #[test]
    fn test_categories_have_distinct_bundles() {
        let diets: Vec<_> = CATEGORIES
            .iter()
            .map(|c| diet_recommendations(*c, None))
            .collect();
        for (i, a) in diets.iter().enumerate() {
            for b in diets.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[rstest]
    #[case("")]
    #[case("unknown")]
    #[case("severely_underweight")]
    fn test_unknown_category_returns_normal_bundle(#[case] category: &str) {
        assert_eq!(
            get_diet_recommendations(category, None),
            diet_recommendations(BmiCategory::Normal, None)
        );
        assert_eq!(
            get_exercise_recommendations(category, Some("moderate")),
            exercise_recommendations(BmiCategory::Normal, None)
        );
        assert_eq!(
            get_lifestyle_recommendations(category),
            lifestyle_recommendations(BmiCategory::Normal)
        );
    }

    #[test]
    fn test_weight_loss_overrides_calories_only() {
        let base = get_diet_recommendations("overweight", None);
        let adjusted = get_diet_recommendations("overweight", Some("weight_loss"));

        assert_eq!(adjusted.calories, WEIGHT_LOSS_CALORIES);
        assert_eq!(adjusted.protein, base.protein);
        assert_eq!(adjusted.carbs, base.carbs);
        assert_eq!(adjusted.fats, base.fats);
        assert_eq!(adjusted.meals, base.meals);
    }

    #[test]
    fn test_muscle_gain_overrides_calories_and_protein() {
        for category in CATEGORIES {
            let base = diet_recommendations(category, None);
            let adjusted = diet_recommendations(category, Some(Goal::MuscleGain));

            assert_eq!(adjusted.calories, MUSCLE_GAIN_CALORIES);
            assert_eq!(adjusted.protein, MUSCLE_GAIN_PROTEIN);
            assert_eq!(adjusted.carbs, base.carbs);
            assert_eq!(adjusted.meals, base.meals);
        }
    }

    #[rstest]
    #[case(Some(Goal::Maintenance))]
    #[case(Some(Goal::GeneralHealth))]
    #[case(None)]
    fn test_other_goals_leave_bundle_untouched(#[case] goal: Option<Goal>) {
        for category in CATEGORIES {
            assert_eq!(
                diet_recommendations(category, goal),
                diet_recommendations(category, None)
            );
        }
    }

    #[test]
    fn test_override_does_not_leak_into_table() {
        let _ = diet_recommendations(BmiCategory::Normal, Some(Goal::WeightLoss));
        let fresh = diet_recommendations(BmiCategory::Normal, None);
        assert_eq!(fresh.calories, "Maintain current calorie intake");
    }

    #[test]
    fn test_unknown_goal_text_is_ignored() {
        assert_eq!(Goal::lookup(Some("get_swole")), None);
        assert_eq!(
            get_diet_recommendations("normal", Some("get_swole")),
            diet_recommendations(BmiCategory::Normal, None)
        );
    }

    #[test]
    fn test_activity_level_does_not_change_exercise_bundle() {
        for level in ActivityLevel::ALL {
            assert_eq!(
                exercise_recommendations(BmiCategory::Obese, Some(level)),
                exercise_recommendations(BmiCategory::Obese, None)
            );
        }
    }

    #[test]
    fn test_goal_round_trips_through_text() {
        for goal in Goal::ALL {
            assert_eq!(goal.as_str().parse::<Goal>().unwrap(), goal);
        }
    }
}
