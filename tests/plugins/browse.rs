use archemap::core::catalog::{archetypes, filter_archetypes, find_archetype, ArchetypeGroup};
use archemap::plugins::browse::schema;

#[test]
fn unfiltered_list_preserves_catalog_order() {
    let listed = filter_archetypes(None, None).expect("filter");
    let listed_names: Vec<&str> = listed.iter().map(|a| a.name).collect();
    let catalog_names: Vec<&str> = archetypes().iter().map(|a| a.name).collect();
    assert_eq!(listed_names, catalog_names);
    assert_eq!(listed.len(), 6);
}

#[test]
fn group_filter_selects_half_the_catalog() {
    let privacy = filter_archetypes(Some(ArchetypeGroup::Privacy), None).expect("filter");
    assert_eq!(privacy.len(), 3);
    assert!(privacy.iter().all(|a| a.group == ArchetypeGroup::Privacy));

    let compliance = filter_archetypes(Some(ArchetypeGroup::Compliance), None).expect("filter");
    assert_eq!(compliance.len(), 3);
    assert!(compliance
        .iter()
        .all(|a| a.group == ArchetypeGroup::Compliance));
}

#[test]
fn name_filter_is_a_regex() {
    let masters = filter_archetypes(None, Some("Master")).expect("filter");
    assert_eq!(masters.len(), 1);
    assert_eq!(masters[0].name, "The Rule Master");

    let insensitive = filter_archetypes(None, Some("(?i)master")).expect("filter");
    assert_eq!(insensitive.len(), 1);

    let both = filter_archetypes(None, Some("Vigilant|Risk")).expect("filter");
    assert_eq!(both.len(), 2);
}

#[test]
fn group_and_name_filters_compose() {
    let none = filter_archetypes(Some(ArchetypeGroup::Privacy), Some("Master")).expect("filter");
    assert!(none.is_empty());
}

#[test]
fn invalid_filter_pattern_is_rejected() {
    let err = filter_archetypes(None, Some("(")).unwrap_err();
    assert!(format!("{}", err).contains("Invalid filter pattern"));
}

#[test]
fn lookup_failure_lists_valid_names() {
    assert!(find_archetype("The Process Optimizer").is_ok());

    let err = find_archetype("The Archivist").unwrap_err();
    let message = format!("{}", err);
    assert!(message.contains("Unknown archetype 'The Archivist'"));
    assert!(message.contains("The Vigilant Guardian"));
}

#[test]
fn serialized_records_use_display_labels() {
    let rule_master = find_archetype("The Rule Master").expect("catalog record");
    let value = serde_json::to_value(rule_master).expect("serialize");
    assert_eq!(value["group"], "Compliance Professionals");
    assert_eq!(value["icon"], "gear");
    assert_eq!(value["name"], "The Rule Master");
    assert_eq!(value["key_questions"].as_array().expect("questions").len(), 4);

    let guardian = find_archetype("The Vigilant Guardian").expect("catalog record");
    let value = serde_json::to_value(guardian).expect("serialize");
    assert_eq!(value["group"], "Privacy Professionals");
    assert_eq!(value["icon"], "shield");
}

#[test]
fn schema_lists_groups_and_members() {
    let schema = schema();
    assert_eq!(schema["name"], "archetypes");
    let groups = schema["groups"].as_array().expect("groups");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0], "Privacy Professionals");
    assert_eq!(schema["archetypes"].as_array().expect("members").len(), 6);
}
