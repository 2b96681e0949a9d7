mod client;
mod flow;
mod questions;
mod render;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::client::ApiClient;
use crate::flow::{AssessmentState, Step};
use crate::questions::QUESTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "equanimity",
    version,
    about = "Five-question equanimity assessment with an AI-generated 3-day practice"
)]
struct Args {
    /// Base URL of the Equanimity API server
    #[arg(long, default_value = "http://localhost:8000")]
    api_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let api = ApiClient::new(args.api_url);

    render::show_header();

    let mut state = AssessmentState::new();

    loop {
        state = match state.step {
            Step::Intro => run_intro(state)?,
            Step::Assessment => run_assessment(state)?,
            Step::Generating => run_generating(state, &api).await?,
            Step::Results => {
                // `complete` is the only path here, so the plan is present
                if let Some(plan) = &state.plan {
                    render::show_plan(plan);
                }
                return Ok(());
            }
        };
    }
}

fn run_intro(state: AssessmentState) -> Result<AssessmentState> {
    render::show_intro();
    let input = read_input("Press Enter to begin your journey (q to quit): ")?;
    if input.eq_ignore_ascii_case("q") {
        std::process::exit(0);
    }
    Ok(state.begin())
}

fn run_assessment(state: AssessmentState) -> Result<AssessmentState> {
    let question = &QUESTIONS[state.current_question - 1];

    render::show_progress(&state);
    render::show_question(question, state.selected.as_deref());

    let mut actions = vec!["1-4 select".to_string()];
    if state.can_go_next() {
        let label = if state.current_question == QUESTIONS.len() {
            "n generate practice"
        } else {
            "n next"
        };
        actions.push(label.to_string());
    }
    if state.can_go_previous() {
        actions.push("p previous".to_string());
    }
    actions.push("q quit".to_string());

    let input = read_input(&format!("[{}]: ", actions.join(", ")))?;

    Ok(match input.to_lowercase().as_str() {
        "q" => std::process::exit(0),
        "n" if state.can_go_next() => state.next(),
        "p" if state.can_go_previous() => state.previous(),
        choice => match choice.parse::<usize>() {
            Ok(i) if (1..=question.options.len()).contains(&i) => {
                state.select(question.options[i - 1].keywords)
            }
            _ => {
                println!("{}", "Please choose one of the listed actions.".dimmed());
                state
            }
        },
    })
}

async fn run_generating(state: AssessmentState, api: &ApiClient) -> Result<AssessmentState> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Generating your personalized equanimity practice...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = api.generate(&state.answers).await;
    spinner.finish_and_clear();

    match result {
        Ok(plan) => Ok(state.complete(plan)),
        Err(e) => {
            render::show_client_error(&e);
            let input = read_input("Press Enter to retry (q to quit): ")?;
            if input.eq_ignore_ascii_case("q") {
                std::process::exit(0);
            }
            // No transition: the state stays in Generating for the retry
            Ok(state)
        }
    }
}

fn read_input(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
