//! Prompt construction and canned fallback advice

use health_advisor_shared::{Goal, HealthAdviceRequest, HealthMetrics};
use std::fmt::Write;

/// System message sent with every request
pub const SYSTEM_PROMPT: &str = "You are a professional health and fitness advisor.";

/// Everything the model is told about the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvicePrompt {
    pub weight: f64,
    pub height: f64,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub daily_routine: Option<String>,
    pub goals: Option<String>,
    pub medical_conditions: Option<String>,
    pub bmi: Option<f64>,
    pub calories_needed: Option<i32>,
}

impl AdvicePrompt {
    pub fn new(request: &HealthAdviceRequest, metrics: &HealthMetrics) -> Self {
        Self {
            weight: request.weight,
            height: request.height,
            age: request.age,
            gender: request.gender.clone(),
            activity_level: request.activity_level.clone(),
            daily_routine: request.daily_routine.clone(),
            goals: request.goals.clone(),
            medical_conditions: request.medical_conditions.clone(),
            bmi: Some(metrics.bmi),
            calories_needed: Some(metrics.calories_needed),
        }
    }

    /// Render the user message
    pub fn render(&self) -> String {
        let text = |value: &Option<String>, placeholder: &str| -> String {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(placeholder)
                .to_string()
        };
        let age = self
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "Not specified".to_string());
        let bmi = self
            .bmi
            .map(|b| b.to_string())
            .unwrap_or_else(|| "Not calculated".to_string());
        let calories = self
            .calories_needed
            .map(|c| c.to_string())
            .unwrap_or_else(|| "Not calculated".to_string());

        format!(
            "{system} Provide personalized, practical, and safe health advice based on the following information:

Patient Information:
- Weight: {weight} kg
- Height: {height} cm
- Age: {age}
- Gender: {gender}
- Activity Level: {activity}
- Daily Routine: {routine}
- Health Goals: {goals}
- Medical Conditions: {conditions}
- BMI: {bmi}
- Daily Calorie Needs: {calories}

Please provide:
1. A brief assessment of their current health status
2. Personalized diet recommendations
3. Exercise suggestions appropriate for their fitness level
4. Lifestyle tips for better health
5. Any precautions or warnings if applicable

Keep the advice practical, encouraging, and easy to follow. Focus on sustainable lifestyle changes rather than quick fixes. Always emphasize consulting with healthcare professionals for medical concerns.

Response:",
            system = SYSTEM_PROMPT,
            weight = self.weight,
            height = self.height,
            age = age,
            gender = text(&self.gender, "Not specified"),
            activity = text(&self.activity_level, "Not specified"),
            routine = text(&self.daily_routine, "Not specified"),
            goals = text(&self.goals, "General health"),
            conditions = text(&self.medical_conditions, "None specified"),
            bmi = bmi,
            calories = calories,
        )
    }
}

/// Advice used when the model is unavailable
pub fn fallback_advice(bmi: Option<f64>, calories_needed: Option<i32>, goal: Option<Goal>) -> String {
    let mut advice =
        String::from("Based on your information, here are some general health recommendations:\n\n");

    if let Some(bmi) = bmi {
        let line = if bmi < 18.5 {
            "Your BMI indicates you're underweight. Consider increasing your calorie intake with nutrient-rich foods."
        } else if bmi < 25.0 {
            "Your BMI is in the healthy range. Focus on maintaining a balanced diet and regular exercise."
        } else if bmi < 30.0 {
            "Your BMI indicates you're overweight. Consider a balanced diet with moderate calorie reduction and regular exercise."
        } else {
            "Your BMI indicates obesity. Consider consulting a healthcare provider for a personalized weight management plan."
        };
        let _ = writeln!(advice, "• {}", line);
    }

    if let Some(calories) = calories_needed {
        let _ = writeln!(
            advice,
            "• Your estimated daily calorie needs are approximately {} calories.",
            calories
        );
    }

    let goal_line = match goal {
        Some(Goal::WeightLoss) => {
            Some("For weight loss, create a moderate calorie deficit through diet and exercise.")
        }
        Some(Goal::MuscleGain) => {
            Some("For muscle gain, increase protein intake and focus on strength training.")
        }
        Some(Goal::Maintenance) => {
            Some("For weight maintenance, balance your calorie intake with your activity level.")
        }
        Some(Goal::GeneralHealth) | None => None,
    };
    if let Some(line) = goal_line {
        let _ = writeln!(advice, "• {}", line);
    }

    advice.push_str("\nGeneral recommendations:\n");
    advice.push_str("• Eat a balanced diet with plenty of fruits, vegetables, and lean proteins\n");
    advice.push_str("• Exercise regularly, aiming for at least 150 minutes of moderate activity per week\n");
    advice.push_str("• Stay hydrated by drinking plenty of water\n");
    advice.push_str("• Get 7-9 hours of quality sleep each night\n");
    advice.push_str("• Consult with healthcare professionals for personalized medical advice\n");

    advice
}
