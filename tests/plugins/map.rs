use archemap::core::catalog::suggest_archetypes;
use archemap::plugins::map::{
    parse_answers, question_views, schema, walk_answers, NO_SUGGESTION_MESSAGE,
};

#[test]
fn parse_answers_accepts_short_and_long_forms() {
    let parsed = parse_answers("y,n,YES , no").expect("parse");
    assert_eq!(parsed, vec![true, false, true, false]);

    // Trailing commas and blank segments are ignored.
    let parsed = parse_answers("y,n,").expect("parse");
    assert_eq!(parsed, vec![true, false]);

    assert_eq!(parse_answers("").expect("parse"), Vec::<bool>::new());
}

#[test]
fn parse_answers_rejects_unknown_tokens() {
    let err = parse_answers("y,maybe").unwrap_err();
    assert!(format!("{}", err).contains("Invalid answer 'maybe'"));
}

#[test]
fn walk_affirming_first_question_completes() {
    let report = walk_answers(&[true]).expect("walk");
    assert!(report.complete);
    assert_eq!(report.steps.len(), 1);
    assert_eq!(report.steps[0].answer, "yes");
    assert_eq!(
        report.suggested,
        vec!["The Vigilant Guardian", "The Rule Master"]
    );
    assert!(report.message.is_none());
}

#[test]
fn walk_declining_everything_reports_no_match() {
    let report = walk_answers(&[false, false, false, false]).expect("walk");
    assert!(report.complete);
    assert!(report.suggested.is_empty());
    assert_eq!(report.message.as_deref(), Some(NO_SUGGESTION_MESSAGE));
}

#[test]
fn walk_with_too_few_answers_is_incomplete() {
    let report = walk_answers(&[false, false]).expect("walk");
    assert!(!report.complete);
    assert_eq!(report.steps.len(), 2);
    assert!(report.suggested.is_empty());
    let message = report.message.expect("incomplete walks name the next question");
    assert!(message.contains("Next question"));
    assert!(message.contains("communication"));
}

#[test]
fn walk_rejects_answers_past_the_end() {
    let err = walk_answers(&[true, true]).unwrap_err();
    assert!(format!("{}", err).contains("Too many answers"));

    let err = walk_answers(&[false, false, false, false, false]).unwrap_err();
    assert!(format!("{}", err).contains("Too many answers"));
}

#[test]
fn question_views_follow_walk_order() {
    let views = question_views();
    assert_eq!(views.len(), 4);
    for (i, view) in views.iter().enumerate() {
        assert_eq!(view.index, i);
        assert!(!view.archetypes.is_empty());
    }
    assert!(views[0].prompt.contains("data security"));
    assert!(views[3].prompt.contains("risks"));
}

#[test]
fn suggest_ranks_by_descending_score() {
    let suggestions = suggest_archetypes("auditing data security regulations");
    assert_eq!(suggestions[0].name, "The Vigilant Guardian");
    for pair in suggestions.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(suggest_archetypes("xylophone zebra").is_empty());
}

#[test]
fn schema_describes_the_subsystem() {
    let schema = schema();
    assert_eq!(schema["name"], "map");
    assert!(schema["commands"].as_array().expect("commands").len() >= 4);
    assert_eq!(schema["questions"].as_array().expect("questions").len(), 4);
}
