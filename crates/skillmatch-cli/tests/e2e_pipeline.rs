//! End-to-end pipeline tests against the built-in catalog.
//!
//! These drive the library directly: quiz session -> scores -> report ->
//! save -> load -> compare, plus resource browsing for a recommended career.

use skillmatch_core::careers::{recommend, MatchTier};
use skillmatch_core::filter::{filter_resources, FilterState};
use skillmatch_core::model::Level;
use skillmatch_core::parser::builtin_catalog;
use skillmatch_core::quiz::{QuizSession, QuizStatus, QuizStep};
use skillmatch_core::report::AssessmentReport;
use skillmatch_core::scoring::{compute_scores, AnswerSet};

fn run_quiz(choices: &[u8]) -> (QuizSession, skillmatch_core::CategoryScores) {
    let catalog = builtin_catalog().unwrap();
    let mut quiz = QuizSession::new(catalog.questions).unwrap();
    for &choice in choices {
        quiz.select(choice).unwrap();
        if let QuizStep::Completed(scores) = quiz.next().unwrap() {
            return (quiz, scores);
        }
    }
    panic!("quiz did not complete after {} answers", choices.len());
}

#[test]
fn e2e_quiz_all_max_answers() {
    let (quiz, scores) = run_quiz(&[4, 4, 4, 4, 4]);

    assert_eq!(quiz.status(), QuizStatus::Completed);
    assert_eq!(scores.len(), 5);
    for (category, score) in scores.iter() {
        assert_eq!(score, 100, "category {category}");
    }
}

#[test]
fn e2e_quiz_scores_include_final_answer() {
    let (_quiz, scores) = run_quiz(&[0, 0, 0, 0, 4]);

    assert_eq!(scores.get("communication"), Some(100));
    assert_eq!(scores.get("technical"), Some(0));
}

#[test]
fn e2e_quiz_matches_direct_scoring() {
    let catalog = builtin_catalog().unwrap();
    let (quiz, scores) = run_quiz(&[3, 1, 4, 0, 2]);

    let direct = compute_scores(&catalog.questions, quiz.answers()).unwrap();
    assert_eq!(scores, direct);
    assert_eq!(scores.get("technical"), Some(75));
    assert_eq!(scores.get("collaboration"), Some(25));
    assert_eq!(scores.get("analytical"), Some(100));
    assert_eq!(scores.get("creativity"), Some(0));
    assert_eq!(scores.get("communication"), Some(50));
}

#[test]
fn e2e_report_roundtrip_and_compare() {
    let catalog = builtin_catalog().unwrap();
    let top = recommend(&catalog.careers, 3);
    let dir = tempfile::tempdir().unwrap();

    let before: AnswerSet = [4u8, 4, 2, 2, 2].into_iter().enumerate().collect();
    let before_scores = compute_scores(&catalog.questions, &before).unwrap();
    let baseline = AssessmentReport::new(&catalog, before, before_scores, &top);
    let baseline_path = dir.path().join("history").join("baseline.json");
    baseline.save_json(&baseline_path).unwrap();

    let loaded = AssessmentReport::load_json(&baseline_path).unwrap();
    assert_eq!(loaded.id, baseline.id);
    assert_eq!(loaded.scores, baseline.scores);
    assert_eq!(loaded.recommendations, vec!["1", "5", "2"]);

    let after: AnswerSet = [1u8, 4, 4, 2, 2].into_iter().enumerate().collect();
    let after_scores = compute_scores(&catalog.questions, &after).unwrap();
    let current = AssessmentReport::new(&catalog, after, after_scores, &top);

    let cmp = current.compare(&loaded, 5);
    assert_eq!(cmp.declines.len(), 1);
    assert_eq!(cmp.declines[0].category, "technical");
    assert_eq!(cmp.declines[0].delta, -75);
    assert_eq!(cmp.gains.len(), 1);
    assert_eq!(cmp.gains[0].category, "analytical");
    assert_eq!(cmp.unchanged, 3);
    assert!(cmp.has_declines());
}

#[test]
fn e2e_recommendations_and_tiers() {
    let catalog = builtin_catalog().unwrap();
    let ranked = recommend(&catalog.careers, 6);

    let ids: Vec<&str> = ranked.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5", "2", "3", "6", "4"]);

    let tiers: Vec<MatchTier> = ranked
        .iter()
        .map(|c| MatchTier::for_percentage(c.match_percentage))
        .collect();
    assert_eq!(tiers[0], MatchTier::Strong);
    assert_eq!(tiers[2], MatchTier::Strong);
    assert_eq!(tiers[3], MatchTier::Good);
    assert_eq!(tiers[5], MatchTier::Fair);
}

#[test]
fn e2e_browse_resources() {
    let catalog = builtin_catalog().unwrap();

    let mut filter = FilterState::new();
    filter.toggle_level(Level::Beginner);
    let beginner = filter_resources(&catalog.resources, &filter);
    let ids: Vec<&str> = beginner.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "6"]);

    filter.clear();
    filter.toggle_tag("python");
    let python = filter_resources(&catalog.resources, &filter);
    assert_eq!(python.len(), 1);
    assert_eq!(python[0].title, "Data Science Specialization");

    filter.clear();
    filter.set_search("frontend");
    filter.toggle_level(Level::Advanced);
    let advanced_frontend = filter_resources(&catalog.resources, &filter);
    assert_eq!(advanced_frontend.len(), 1);
    assert_eq!(advanced_frontend[0].id, "7");
}

#[test]
fn e2e_career_prefilter_uses_substring_tags() {
    let catalog = builtin_catalog().unwrap();

    let devops = catalog.careers.iter().find(|c| c.id == "5").unwrap();
    let matched = filter_resources(&catalog.resources, &FilterState::for_career(devops));
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "5");

    // "R" is a skill of the data scientist path, and containment matching
    // lets it hit any tag with an "r" in it.
    let data = catalog.careers.iter().find(|c| c.id == "2").unwrap();
    let matched = filter_resources(&catalog.resources, &FilterState::for_career(data));
    assert_eq!(matched.len(), catalog.resources.len());
}
