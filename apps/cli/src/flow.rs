//! Assessment flow state machine.
//!
//! Linear wizard: `Intro → Assessment → Generating → Results`. Every
//! transition handler takes the state by value and returns the successor
//! state; out-of-turn actions return the state unchanged. An answer is
//! recorded only when an option is selected and "next" is taken, so
//! `answers` always holds exactly one entry per completed question.

use std::collections::BTreeMap;

use crate::client::TechniquePlan;
use crate::questions::QUESTIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intro,
    Assessment,
    Generating,
    Results,
}

#[derive(Debug, Clone)]
pub struct AssessmentState {
    pub step: Step,
    /// 1-based ordinal of the question being shown.
    pub current_question: usize,
    /// Question ordinal (string key, the wire format) → chosen keyword set.
    pub answers: BTreeMap<String, String>,
    /// Keywords of the currently selected option, not yet recorded.
    pub selected: Option<String>,
    /// Set exactly once, by `complete`. Never `Some` outside `Results`.
    pub plan: Option<TechniquePlan>,
}

impl AssessmentState {
    pub fn new() -> Self {
        Self {
            step: Step::Intro,
            current_question: 1,
            answers: BTreeMap::new(),
            selected: None,
            plan: None,
        }
    }

    /// Intro → Assessment at question 1 with cleared answers.
    pub fn begin(self) -> Self {
        if self.step != Step::Intro {
            return self;
        }
        Self {
            step: Step::Assessment,
            current_question: 1,
            answers: BTreeMap::new(),
            selected: None,
            plan: None,
        }
    }

    /// Selects (or re-selects) an option for the current question.
    pub fn select(mut self, keywords: &str) -> Self {
        if self.step != Step::Assessment {
            return self;
        }
        self.selected = Some(keywords.to_string());
        self
    }

    pub fn can_go_previous(&self) -> bool {
        self.step == Step::Assessment && self.current_question > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.step == Step::Assessment && self.selected.is_some()
    }

    /// Steps back one question. No-op at question 1. The answer already
    /// recorded for the earlier question is kept and pre-fills the selection.
    pub fn previous(mut self) -> Self {
        if !self.can_go_previous() {
            return self;
        }
        self.current_question -= 1;
        self.selected = self.recorded(self.current_question);
        self
    }

    /// Records the current selection and advances. No-op without a
    /// selection. Recording the final question moves to `Generating`.
    pub fn next(mut self) -> Self {
        let Some(keywords) = self.selected.clone() else {
            return self;
        };
        if self.step != Step::Assessment {
            return self;
        }

        self.answers
            .insert(self.current_question.to_string(), keywords);

        if self.current_question < QUESTIONS.len() {
            self.current_question += 1;
            self.selected = self.recorded(self.current_question);
        } else {
            self.step = Step::Generating;
            self.selected = None;
        }
        self
    }

    /// Generating → Results, storing the plan. The only way to reach
    /// `Results`: a failed service call leaves the state untouched.
    pub fn complete(mut self, plan: TechniquePlan) -> Self {
        if self.step != Step::Generating {
            return self;
        }
        self.step = Step::Results;
        self.plan = Some(plan);
        self
    }

    fn recorded(&self, ordinal: usize) -> Option<String> {
        self.answers.get(&ordinal.to_string()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DayPlan;

    fn sample_plan() -> TechniquePlan {
        let day = DayPlan {
            title: "t".to_string(),
            morning_practice: "m".to_string(),
            daily_integration: "d".to_string(),
            evening_reflection: "e".to_string(),
        };
        TechniquePlan {
            technique_title: "The Path of Present Awareness".to_string(),
            description: "d".to_string(),
            insight: "i".to_string(),
            day1: day.clone(),
            day2: day.clone(),
            day3: day,
            zen_quote: "z".to_string(),
            long_term_guidance: "l".to_string(),
        }
    }

    fn answered_through(n: usize) -> AssessmentState {
        let mut state = AssessmentState::new().begin();
        for q in 0..n {
            state = state.select(QUESTIONS[q].options[3].keywords).next();
        }
        state
    }

    #[test]
    fn test_new_state_starts_at_intro() {
        let state = AssessmentState::new();
        assert_eq!(state.step, Step::Intro);
        assert_eq!(state.current_question, 1);
        assert!(state.answers.is_empty());
        assert!(state.plan.is_none());
    }

    #[test]
    fn test_begin_enters_assessment_with_cleared_answers() {
        let state = AssessmentState::new().begin();
        assert_eq!(state.step, Step::Assessment);
        assert_eq!(state.current_question, 1);
        assert!(state.answers.is_empty());
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_next_is_noop_without_selection() {
        let state = AssessmentState::new().begin();
        let after = state.clone().next();
        assert_eq!(after.step, Step::Assessment);
        assert_eq!(after.current_question, 1);
        assert!(after.answers.is_empty());
    }

    #[test]
    fn test_previous_is_noop_at_first_question() {
        let state = AssessmentState::new().begin();
        assert!(!state.can_go_previous());
        let after = state.previous();
        assert_eq!(after.current_question, 1);
    }

    #[test]
    fn test_next_records_answer_under_ordinal_and_advances() {
        let state = AssessmentState::new()
            .begin()
            .select("accepting, flowing, adaptable, resilient, balanced")
            .next();
        assert_eq!(state.current_question, 2);
        assert_eq!(
            state.answers["1"],
            "accepting, flowing, adaptable, resilient, balanced"
        );
        assert_eq!(state.answers.len(), 1);
    }

    #[test]
    fn test_reselect_replaces_never_accumulates() {
        let state = AssessmentState::new()
            .begin()
            .select("first, choice")
            .select("second, choice")
            .next();
        assert_eq!(state.answers["1"], "second, choice");
    }

    #[test]
    fn test_previous_keeps_recorded_answer_and_prefills_selection() {
        let state = answered_through(2).previous();
        assert_eq!(state.current_question, 2);
        assert_eq!(state.answers.len(), 2);
        assert_eq!(
            state.selected.as_deref(),
            Some(QUESTIONS[1].options[3].keywords)
        );
    }

    #[test]
    fn test_exactly_one_answer_per_completed_question() {
        for n in 0..=4 {
            let state = answered_through(n);
            assert_eq!(state.answers.len(), n);
            for q in 1..=n {
                assert!(state.answers.contains_key(&q.to_string()));
            }
        }
    }

    #[test]
    fn test_answering_final_question_enters_generating() {
        let state = answered_through(5);
        assert_eq!(state.step, Step::Generating);
        assert_eq!(state.answers.len(), 5);
        assert_eq!(
            state.answers["5"],
            "equanimous, steady, unchanged, centered, stable"
        );
    }

    #[test]
    fn test_failed_generation_leaves_state_in_generating() {
        // A service failure produces no `complete` call; the state object is
        // simply carried forward unchanged, never reaching Results.
        let state = answered_through(5);
        assert_eq!(state.step, Step::Generating);
        assert!(state.plan.is_none());
        // Navigation is inert while generating
        let state = state.next().previous().select("x");
        assert_eq!(state.step, Step::Generating);
        assert!(state.plan.is_none());
    }

    #[test]
    fn test_complete_stores_plan_and_enters_results() {
        let state = answered_through(5).complete(sample_plan());
        assert_eq!(state.step, Step::Results);
        assert_eq!(
            state.plan.unwrap().technique_title,
            "The Path of Present Awareness"
        );
    }

    #[test]
    fn test_complete_is_noop_outside_generating() {
        let state = AssessmentState::new().begin().complete(sample_plan());
        assert_eq!(state.step, Step::Assessment);
        assert!(state.plan.is_none());
    }
}
