use archemap::core::assets;
use archemap::core::catalog::{self, ArchetypeGroup};
use archemap::core::decision::{decision_questions, DecisionMap, DecisionQuestion};

fn names(map: &DecisionMap) -> Vec<&'static str> {
    map.result().iter().map(|a| a.name).collect()
}

#[test]
fn catalog_has_six_archetypes_in_two_groups() {
    let all = catalog::archetypes();
    assert_eq!(all.len(), 6);

    let privacy: Vec<_> = all
        .iter()
        .filter(|a| a.group == ArchetypeGroup::Privacy)
        .collect();
    let compliance: Vec<_> = all
        .iter()
        .filter(|a| a.group == ArchetypeGroup::Compliance)
        .collect();
    assert_eq!(privacy.len(), 3);
    assert_eq!(compliance.len(), 3);

    let mut seen: Vec<&str> = all.iter().map(|a| a.name).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 6, "archetype names must be unique");

    // Catalog order groups privacy first, compliance second.
    assert_eq!(all[0].name, "The Vigilant Guardian");
    assert!(all[..3].iter().all(|a| a.group == ArchetypeGroup::Privacy));
    assert!(all[3..].iter().all(|a| a.group == ArchetypeGroup::Compliance));
}

#[test]
fn catalog_records_are_fully_populated() {
    for archetype in catalog::archetypes() {
        assert!(!archetype.name.trim().is_empty());
        assert!(!archetype.core_identity.trim().is_empty());
        assert!(!archetype.key_traits.trim().is_empty());
        assert!(!archetype.goals.trim().is_empty());
        assert!(!archetype.challenges.trim().is_empty());
        assert!(!archetype.ux_needs.trim().is_empty());
        assert!(!archetype.pm_focus.trim().is_empty());
        assert_eq!(
            archetype.key_questions.len(),
            4,
            "{} should carry four feature questions",
            archetype.name
        );
        assert!(!archetype.keywords.is_empty());
    }
}

#[test]
fn question_references_resolve_against_catalog() {
    for question in decision_questions() {
        let resolved = question.resolve();
        assert_eq!(
            resolved.len(),
            question.archetypes.len(),
            "every referenced name should have a catalog record"
        );
        for (archetype, name) in resolved.iter().zip(question.archetypes) {
            assert_eq!(archetype.name, *name);
        }
    }
}

#[test]
fn map_starts_at_first_question() {
    let map = DecisionMap::new();
    assert_eq!(map.pointer(), 0);
    assert_eq!(map.len(), 4);
    assert!(!map.is_finished());
    assert!(map.result().is_empty());
    let first = map.current_question().expect("first question");
    assert!(first.prompt.contains("data security"));
}

#[test]
fn affirm_short_circuits_to_finished() {
    let mut map = DecisionMap::new();
    assert!(map.affirm());
    assert!(map.is_finished());
    assert_eq!(map.pointer(), map.len());
    assert!(map.current_question().is_none());
    assert_eq!(names(&map), vec!["The Vigilant Guardian", "The Rule Master"]);
}

#[test]
fn decline_advances_without_finishing() {
    let mut map = DecisionMap::new();
    assert!(map.decline());
    assert_eq!(map.pointer(), 1);
    assert!(!map.is_finished());
    assert!(map.result().is_empty());
    let second = map.current_question().expect("second question");
    assert!(second.prompt.contains("automating"));
}

#[test]
fn decline_decline_affirm_suggests_communicator() {
    let mut map = DecisionMap::new();
    assert!(map.decline());
    assert!(map.decline());
    assert!(map.affirm());
    assert!(map.is_finished());
    assert_eq!(names(&map), vec!["The Communicator & Educator"]);
}

#[test]
fn declining_every_question_finishes_empty() {
    let mut map = DecisionMap::new();
    for _ in 0..map.len() {
        assert!(map.decline());
    }
    assert!(map.is_finished());
    assert_eq!(map.pointer(), map.len());
    assert!(map.result().is_empty());
}

#[test]
fn answers_are_inert_once_finished() {
    let mut map = DecisionMap::new();
    map.affirm();
    let before = names(&map);
    let pointer = map.pointer();

    assert!(!map.affirm());
    assert!(!map.decline());
    assert_eq!(names(&map), before);
    assert_eq!(map.pointer(), pointer);
}

#[test]
fn reset_returns_to_first_question() {
    let mut map = DecisionMap::new();
    map.decline();
    map.affirm();
    assert!(map.is_finished());

    map.reset();
    assert_eq!(map.pointer(), 0);
    assert!(!map.is_finished());
    assert!(map.result().is_empty());

    // A fresh walk over the same map reaches a fresh outcome.
    map.affirm();
    assert_eq!(names(&map), vec!["The Vigilant Guardian", "The Rule Master"]);
}

#[test]
fn empty_question_list_starts_finished() {
    let mut map = DecisionMap::with_questions(&[]);
    assert!(map.is_empty());
    assert!(map.is_finished());
    assert!(map.current_question().is_none());
    assert!(!map.affirm());
    assert!(!map.decline());
    assert!(map.result().is_empty());
}

static PARTLY_STALE_QUESTIONS: [DecisionQuestion; 1] = [DecisionQuestion {
    prompt: "Does this feature archive historical records?",
    archetypes: &["The Archivist", "The Vigilant Guardian"],
}];

#[test]
fn stale_references_shrink_the_outcome() {
    let mut map = DecisionMap::with_questions(&PARTLY_STALE_QUESTIONS);
    assert!(map.affirm());
    assert_eq!(names(&map), vec!["The Vigilant Guardian"]);
}

#[test]
fn guides_list_and_resolve() {
    let guides = assets::list_guides();
    assert!(guides.contains(&"USAGE.md"));
    assert!(guides.contains(&"WHY_IT_MATTERS.md"));
    assert!(guides.contains(&"ROADMAP_PRINCIPLES.md"));

    for guide in guides {
        let content = assets::get_guide(guide).expect("listed guide should be readable");
        assert!(!content.trim().is_empty());
    }

    assert!(assets::get_guide("DOES_NOT_EXIST.md").is_none());
}
