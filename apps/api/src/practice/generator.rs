//! Technique generator — flattens assessment keywords into the prompt, calls
//! the model once, and coerces the reply into a `TechniquePlan`.
//!
//! Shape policy: a transport failure is an error (there is no output to
//! repair), but unparsable or incomplete model output is absorbed by the
//! fixed fallback plan and returned as a success.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, LlmClient};
use crate::practice::plan::{fallback_plan, TechniquePlan};
use crate::practice::prompts::TECHNIQUE_PROMPT_TEMPLATE;

/// Top-level fields the model reply must carry to be accepted as-is.
const REQUIRED_FIELDS: [&str; 8] = [
    "technique_title",
    "description",
    "insight",
    "day1",
    "day2",
    "day3",
    "zen_quote",
    "long_term_guidance",
];

/// Flattens every answer's keyword string into one combined tag list.
/// Completeness of `answers` is the caller's concern, not validated here.
pub fn flatten_keywords(answers: &HashMap<String, String>) -> Vec<String> {
    let mut keywords = Vec::new();
    // Sort by ordinal so the prompt is stable across identical inputs
    let mut ordinals: Vec<&String> = answers.keys().collect();
    ordinals.sort();
    for ordinal in ordinals {
        keywords.extend(answers[ordinal].split(", ").map(str::to_string));
    }
    keywords
}

/// Builds the generation prompt for a flattened keyword list.
pub fn build_prompt(keywords: &[String]) -> String {
    TECHNIQUE_PROMPT_TEMPLATE.replace("{keywords}", &keywords.join(", "))
}

/// Coerces raw model text into a `TechniquePlan`.
///
/// Strips optional code fences, parses the text as an untyped JSON document,
/// checks the fixed required-field list, then deserializes into the typed
/// plan. Any failure along the way yields the fallback plan.
pub fn plan_from_model_text(raw: &str) -> TechniquePlan {
    let candidate = strip_json_fences(raw);

    let document: Value = match serde_json::from_str(candidate) {
        Ok(v) => v,
        Err(e) => {
            warn!("Model output is not valid JSON ({e}); using fallback plan");
            return fallback_plan();
        }
    };

    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .find(|field| document.get(**field).is_none())
    {
        warn!("Model output missing required field '{missing}'; using fallback plan");
        return fallback_plan();
    }

    match serde_json::from_value::<TechniquePlan>(document) {
        Ok(plan) => plan,
        Err(e) => {
            warn!("Model output failed coercion ({e}); using fallback plan");
            fallback_plan()
        }
    }
}

/// Full generation pipeline: flatten → prompt → model call → shape coercion.
pub async fn generate_plan(
    llm: &LlmClient,
    answers: &HashMap<String, String>,
) -> Result<TechniquePlan, AppError> {
    let keywords = flatten_keywords(answers);
    let prompt = build_prompt(&keywords);

    let raw = llm.call(&prompt).await?;

    Ok(plan_from_model_text(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_formed_reply() -> String {
        serde_json::to_string(&serde_json::json!({
            "technique_title": "River Mind Practice",
            "description": "A practice of letting experience flow.",
            "insight": "The river does not argue with its banks.",
            "day1": {
                "title": "Settling",
                "morning_practice": "Ten minutes of breath counting.",
                "daily_integration": "Pause before replying to email.",
                "evening_reflection": "Name one moment of stillness."
            },
            "day2": {
                "title": "Widening",
                "morning_practice": "Open-monitoring sit.",
                "daily_integration": "Label reactions as they arise.",
                "evening_reflection": "Review the day without judgment."
            },
            "day3": {
                "title": "Flowing",
                "morning_practice": "Walking meditation.",
                "daily_integration": "Meet one difficulty as weather.",
                "evening_reflection": "Set a continuing intention."
            },
            "zen_quote": "Sitting quietly, doing nothing, spring comes.",
            "long_term_guidance": "Keep a short daily sit."
        }))
        .unwrap()
    }

    #[test]
    fn test_flatten_keywords_splits_and_orders_by_ordinal() {
        let mut answers = HashMap::new();
        answers.insert("2".to_string(), "grateful, learning".to_string());
        answers.insert("1".to_string(), "accepting, flowing".to_string());

        let keywords = flatten_keywords(&answers);
        assert_eq!(keywords, vec!["accepting", "flowing", "grateful", "learning"]);
    }

    #[test]
    fn test_flatten_keywords_empty_answers() {
        let answers = HashMap::new();
        assert!(flatten_keywords(&answers).is_empty());
    }

    #[test]
    fn test_build_prompt_embeds_keywords() {
        let keywords = vec!["accepting".to_string(), "flowing".to_string()];
        let prompt = build_prompt(&keywords);
        assert!(prompt.contains("ASSESSMENT KEYWORDS: accepting, flowing"));
        assert!(!prompt.contains("{keywords}"));
    }

    #[test]
    fn test_well_formed_reply_passes_through_unmutated() {
        let plan = plan_from_model_text(&well_formed_reply());
        assert_eq!(plan.technique_title, "River Mind Practice");
        assert_eq!(plan.day1.title, "Settling");
        assert_eq!(plan.day3.evening_reflection, "Set a continuing intention.");
        assert_eq!(plan.zen_quote, "Sitting quietly, doing nothing, spring comes.");
    }

    #[test]
    fn test_fenced_reply_parses_identically_to_unfenced() {
        let unfenced = plan_from_model_text(&well_formed_reply());
        let fenced = plan_from_model_text(&format!("```json\n{}\n```", well_formed_reply()));
        assert_eq!(fenced.technique_title, unfenced.technique_title);
        assert_eq!(fenced.day2.morning_practice, unfenced.day2.morning_practice);
    }

    #[test]
    fn test_invalid_json_yields_fallback() {
        let plan = plan_from_model_text("I am deeply sorry, here is your practice:");
        assert_eq!(plan.technique_title, "The Path of Present Awareness");
    }

    #[test]
    fn test_missing_required_field_yields_fallback() {
        let mut document: Value = serde_json::from_str(&well_formed_reply()).unwrap();
        document.as_object_mut().unwrap().remove("zen_quote");
        let plan = plan_from_model_text(&document.to_string());
        assert_eq!(plan.technique_title, "The Path of Present Awareness");
    }

    #[test]
    fn test_malformed_day_object_yields_fallback() {
        let mut document: Value = serde_json::from_str(&well_formed_reply()).unwrap();
        document["day2"] = Value::String("not an object".to_string());
        let plan = plan_from_model_text(&document.to_string());
        assert_eq!(plan.technique_title, "The Path of Present Awareness");
    }

    /// End-to-end shape property: the canonical five-answer mapping with a
    /// garbled model reply must land on the fixed fallback plan.
    #[test]
    fn test_full_answer_set_with_model_failure_falls_back() {
        let mut answers = HashMap::new();
        answers.insert(
            "1".to_string(),
            "accepting, flowing, adaptable, resilient, balanced".to_string(),
        );
        answers.insert(
            "2".to_string(),
            "grateful, learning, growing, open, receptive".to_string(),
        );
        answers.insert(
            "3".to_string(),
            "witnessing, observing, spacious, present, aware".to_string(),
        );
        answers.insert(
            "4".to_string(),
            "surrendering, trusting, releasing, peaceful, flowing".to_string(),
        );
        answers.insert(
            "5".to_string(),
            "equanimous, steady, unchanged, centered, stable".to_string(),
        );

        let keywords = flatten_keywords(&answers);
        assert_eq!(keywords.len(), 25);

        let prompt = build_prompt(&keywords);
        assert!(prompt.contains("equanimous"));

        let plan = plan_from_model_text("```json\n{ truncated");
        assert_eq!(plan.technique_title, "The Path of Present Awareness");
    }
}
