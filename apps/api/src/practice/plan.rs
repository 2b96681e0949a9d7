//! The TechniquePlan wire type and the fixed fallback plan.

use serde::{Deserialize, Serialize};

/// One day of the 3-day practice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub title: String,
    pub morning_practice: String,
    pub daily_integration: String,
    pub evening_reflection: String,
}

/// The structured 3-day practice returned to the client.
/// Field names are the wire contract; do not rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniquePlan {
    pub technique_title: String,
    pub description: String,
    pub insight: String,
    pub day1: DayPlan,
    pub day2: DayPlan,
    pub day3: DayPlan,
    pub zen_quote: String,
    pub long_term_guidance: String,
}

/// The fixed plan substituted when model output cannot be coerced into the
/// required shape. Fully populated and stable, so malformed model output is
/// never a user-facing error.
pub fn fallback_plan() -> TechniquePlan {
    TechniquePlan {
        technique_title: "The Path of Present Awareness".to_string(),
        description: "Based on your responses, you would benefit from a practice that cultivates \
            moment-to-moment awareness and emotional balance. This gentle yet powerful approach \
            will help you develop equanimity through mindful presence."
            .to_string(),
        insight: "True equanimity arises not from avoiding life's challenges, but from meeting \
            them with an open, spacious heart that remains unchanged by changing circumstances."
            .to_string(),
        day1: DayPlan {
            title: "Grounding Practice".to_string(),
            morning_practice: "Begin with 10 minutes of breath awareness. Sit comfortably, close \
                your eyes, and simply observe your natural breathing. When thoughts arise, gently \
                return to the breath without judgment."
                .to_string(),
            daily_integration: "Throughout the day, take three conscious breaths before \
                responding to any challenging situation. This creates space between stimulus and \
                response."
                .to_string(),
            evening_reflection: "Before sleep, reflect on one moment when you remained calm \
                during difficulty, appreciating your natural capacity for peace."
                .to_string(),
        },
        day2: DayPlan {
            title: "Expanding Awareness".to_string(),
            morning_practice: "Practice loving-kindness meditation for 15 minutes. Begin with \
                yourself, then extend compassion to loved ones, neutral people, difficult people, \
                and all beings."
                .to_string(),
            daily_integration: "When facing criticism or conflict, silently wish the other \
                person well while maintaining your center. Notice how this changes your internal \
                experience."
                .to_string(),
            evening_reflection: "Journal about how extending compassion affected your sense of \
                inner stability and connection."
                .to_string(),
        },
        day3: DayPlan {
            title: "Embodied Wisdom".to_string(),
            morning_practice: "Sit in open awareness for 15 minutes. Rest in spacious \
                consciousness, aware of thoughts and feelings arising and passing without \
                attachment."
                .to_string(),
            daily_integration: "Practice seeing all experiences as temporary weather patterns in \
                the sky of awareness. You are the sky, not the weather."
                .to_string(),
            evening_reflection: "Set an intention to continue cultivating equanimity, knowing \
                that each moment offers a fresh opportunity to practice."
                .to_string(),
        },
        zen_quote: "Peace comes from within. Do not seek it without. - Buddha".to_string(),
        long_term_guidance: "Continue daily meditation practice, even if just 5-10 minutes. \
            Remember that equanimity is not a destination but a way of traveling through life \
            with grace and wisdom."
            .to_string(),
    }
}
