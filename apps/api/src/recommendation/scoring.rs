//! Rule-based career match scoring.
//!
//! Each rule is evaluated independently against a profile and contributes a
//! fixed number of points. Totals are additive and floored at 1, so a
//! personalised result never reports a profile as a zero match. Scoring is
//! deterministic and side-effect free.

use crate::recommendation::models::{AnswerSet, CareerProfile, ScoredProfile};

const SUBJECT_MATCH: u32 = 3; // q1
const ACTIVITY_MATCH: u32 = 3; // q2
const ENVIRONMENT_MATCH: u32 = 2; // q3
const PROBLEM_SOLVING_YES: u32 = 4; // q4
const PROBLEM_SOLVING_NO: u32 = 1; // q4
const HANDS_ON_MATCH: u32 = 3; // q5
const STRUCTURED_MATCH: u32 = 2; // q5
const IMPACT_MATCH: u32 = 5; // q6

const MIN_SCORE: u32 = 1;

const PROBLEM_SOLVING: &str = "Problem Solving";

/// Scores one profile against a user's answers. Unanswered or unrecognised
/// questions contribute nothing. The result is always at least 1.
pub fn score_profile(profile: &CareerProfile, answers: &AnswerSet) -> u32 {
    let mut score = 0;

    if answers.get("q1").is_some_and(|a| profile.has_interest(a)) {
        score += SUBJECT_MATCH;
    }

    if answers.get("q2").is_some_and(|a| profile.has_interest(a)) {
        score += ACTIVITY_MATCH;
    }

    if answers
        .get("q3")
        .is_some_and(|a| profile.has_work_environment(a))
    {
        score += ENVIRONMENT_MATCH;
    }

    match answers.get("q4") {
        Some("Yes") if profile.has_interest(PROBLEM_SOLVING) => score += PROBLEM_SOLVING_YES,
        Some("No") if !profile.has_interest(PROBLEM_SOLVING) => score += PROBLEM_SOLVING_NO,
        _ => {}
    }

    match answers.get("q5") {
        Some("Hands-on")
            if profile.has_work_environment("Independent")
                || profile.has_work_environment("Dynamic") =>
        {
            score += HANDS_ON_MATCH
        }
        Some("Structured") if profile.has_work_environment("Collaborative") => {
            score += STRUCTURED_MATCH
        }
        _ => {}
    }

    if answers.get("q6").is_some_and(|a| profile.has_impact_area(a)) {
        score += IMPACT_MATCH;
    }

    score.max(MIN_SCORE)
}

/// Scores every profile in `catalog` and returns them ranked by descending
/// score. Equal scores keep their catalog order.
///
/// An empty answer set means no personalisation: no rule is applied, every
/// profile gets score 0 and catalog order is returned as is, leaving any
/// secondary ordering to the caller.
pub fn score_and_rank(catalog: &[CareerProfile], answers: &AnswerSet) -> Vec<ScoredProfile> {
    if answers.is_empty() {
        return catalog
            .iter()
            .cloned()
            .map(|profile| ScoredProfile { profile, score: 0 })
            .collect();
    }

    let mut scored: Vec<ScoredProfile> = catalog
        .iter()
        .map(|profile| ScoredProfile {
            score: score_profile(profile, answers),
            profile: profile.clone(),
        })
        .collect();

    // `sort_by` is stable: ties stay in catalog order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
