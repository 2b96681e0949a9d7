//! Terminal rendering for the wizard and the generated plan.

use colored::Colorize;

use crate::client::{ClientError, DayPlan, TechniquePlan};
use crate::flow::AssessmentState;
use crate::questions::{Question, QUESTIONS};

pub fn show_header() {
    println!();
    println!("{}", "  Equanimity".bold());
    println!("{}", "  Path to Inner Balance & Peaceful Awareness".italic());
    println!();
}

pub fn show_intro() {
    println!(
        "Equanimity is a state of mental calmness and composure, especially in\n\
         difficult situations: balanced awareness, neither grasping at pleasant\n\
         experiences nor pushing away unpleasant ones."
    );
    println!();
    println!(
        "{}",
        "\"In the midst of winter, I found there was, within me, an invincible\n\
         summer.\" - Albert Camus"
            .italic()
    );
    println!();
    println!(
        "Answer five short questions and receive a personalized 3-day practice\n\
         generated for your current patterns."
    );
    println!();
}

pub fn show_progress(state: &AssessmentState) {
    println!(
        "{}",
        format!(
            "Progress: {} of {} questions completed",
            state.answers.len().min(QUESTIONS.len()),
            QUESTIONS.len()
        )
        .dimmed()
    );
    println!();
}

pub fn show_question(question: &Question, selected: Option<&str>) {
    println!(
        "{}",
        format!("QUESTION {} OF {}", question.number, QUESTIONS.len()).bold()
    );
    println!("{}", question.text.bold());
    println!();
    for (i, opt) in question.options.iter().enumerate() {
        let marker = if selected == Some(opt.keywords) {
            "●".green()
        } else {
            "○".normal()
        };
        println!("  {} {}. {}", marker, i + 1, opt.text);
    }
    if let Some(keywords) = selected {
        println!();
        println!("  {} {}", "Keywords:".dimmed(), keywords.italic());
    }
    println!();
}

pub fn show_plan(plan: &TechniquePlan) {
    println!();
    println!("{}", plan.technique_title.bold().underline());
    println!();
    println!("{}", plan.description);
    println!();
    println!("{}", format!("\"{}\"", plan.zen_quote).italic());
    println!();
    println!("{} {}", "Key Insight:".bold(), plan.insight);

    for (number, day) in [(1, &plan.day1), (2, &plan.day2), (3, &plan.day3)] {
        show_day(number, day);
    }

    println!();
    println!("{}", "Continuing Your Journey".bold());
    println!("{}", plan.long_term_guidance);
    println!();
}

fn show_day(number: usize, day: &DayPlan) {
    println!();
    println!("{}", format!("Day {}: {}", number, day.title).bold());
    println!();
    println!("  {}", "Morning Practice (10-15 minutes):".yellow().bold());
    println!("  {}", day.morning_practice);
    println!();
    println!("  {}", "Daily Integration:".yellow().bold());
    println!("  {}", day.daily_integration);
    println!();
    println!("  {}", "Evening Reflection:".yellow().bold());
    println!("  {}", day.evening_reflection);
}

pub fn show_client_error(error: &ClientError) {
    match error {
        ClientError::Connection(url) => {
            eprintln!("{} {error}", "Connection Error:".red().bold());
            eprintln!(
                "{}",
                format!("Ensure the API server is running at {url}").dimmed()
            );
        }
        ClientError::Timeout => {
            eprintln!("{} {error}", "Timeout Error:".red().bold());
            eprintln!(
                "{}",
                "The AI is taking longer than expected. Please try again.".dimmed()
            );
        }
        ClientError::Api { .. } | ClientError::Http(_) => {
            eprintln!("{} {error}", "API Error:".red().bold());
        }
    }
}
