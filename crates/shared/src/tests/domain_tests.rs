use super::*;

fn parse(raw: &str) -> CatalogDocument {
    serde_json::from_str(raw).expect("catalog document")
}

#[test]
fn missing_courses_field_decodes_to_empty_list() {
    assert!(parse("{}").courses.is_empty());
    assert!(parse(r#"{"courses": null}"#).courses.is_empty());
}

#[test]
fn optional_fields_stay_absent_when_missing_or_blank() {
    let doc = parse(
        r#"{"courses":[{"title":"Intro","level":"beginner","description":"","version":null,"repo":"https://x"}]}"#,
    );
    let course = &doc.courses[0];
    assert_eq!(course.title, "Intro");
    assert_eq!(course.description, None);
    assert_eq!(course.version, None);
    assert_eq!(course.language, None);
    assert!(course.topics.is_empty());
}

#[test]
fn scalar_values_are_accepted_as_text() {
    let doc = parse(
        r#"{"courses":[{"title":101,"level":"beginner","version":2.1,"topics":["a",3,null,true],"repo":"https://x"}]}"#,
    );
    let course = &doc.courses[0];
    assert_eq!(course.title, "101");
    assert_eq!(course.version.as_deref(), Some("2.1"));
    assert_eq!(course.topics, vec!["a", "3", "true"]);
}

#[test]
fn non_array_topics_count_as_absent() {
    let doc = parse(r#"{"courses":[{"title":"T","level":"x","topics":"rust","repo":"r"}]}"#);
    assert!(doc.courses[0].topics.is_empty());
}

#[test]
fn records_missing_required_fields_still_decode() {
    let doc = parse(r#"{"courses":[{"level":"advanced"}]}"#);
    let course = &doc.courses[0];
    assert_eq!(course.title, "");
    assert_eq!(course.repo, "");
    assert_eq!(course.missing_required_fields(), vec!["title", "repo"]);
}

#[test]
fn courses_that_are_not_a_list_are_rejected() {
    assert!(serde_json::from_str::<CatalogDocument>(r#"{"courses":"none"}"#).is_err());
}

#[test]
fn non_object_records_become_blank_cards_beside_valid_ones() {
    let doc = parse(
        r#"{"courses":[{"title":"Good","level":"beginner","repo":"https://g"},"oops",42,["Array Course","beginner"]]}"#,
    );
    assert_eq!(doc.courses.len(), 4);
    assert_eq!(doc.courses[0].title, "Good");
    assert_eq!(doc.courses[0].repo, "https://g");
    assert!(doc.courses[1..].iter().all(|course| *course == Course::default()));
    assert_eq!(doc.malformed_records, vec![1, 2, 3]);
}

#[test]
fn body_must_be_an_object() {
    assert!(serde_json::from_str::<CatalogDocument>("[]").is_err());
    assert!(serde_json::from_str::<CatalogDocument>(r#"[[["Array Course","beginner"]]]"#).is_err());
    assert!(serde_json::from_str::<CatalogDocument>("null").is_err());
    assert!(serde_json::from_str::<CatalogDocument>("42").is_err());
}

#[test]
fn falsy_optional_values_leave_their_block_out() {
    let doc = parse(
        r#"{"courses":[{"title":0,"level":"x","description":false,"version":0,"language":0.0,"repo":"r"}]}"#,
    );
    let course = &doc.courses[0];
    assert_eq!(course.title, "0");
    assert_eq!(course.description, None);
    assert_eq!(course.version, None);
    assert_eq!(course.language, None);

    let doc = parse(r#"{"courses":[{"title":"t","level":"x","version":10,"description":true,"repo":"r"}]}"#);
    assert_eq!(doc.courses[0].version.as_deref(), Some("10"));
    assert_eq!(doc.courses[0].description.as_deref(), Some("true"));
}

#[test]
fn observed_levels_keep_first_seen_order() {
    let courses = vec![
        Course::new("a", "advanced", "r"),
        Course::new("b", "beginner", "r"),
        Course::new("c", "advanced", "r"),
        Course::new("d", "intermediate", "r"),
    ];
    assert_eq!(
        observed_levels(&courses),
        vec!["advanced", "beginner", "intermediate"]
    );
}

#[test]
fn builder_treats_empty_optional_text_as_absent() {
    let course = Course::new("t", "l", "r")
        .with_description("")
        .with_version("1.0");
    assert_eq!(course.description, None);
    assert_eq!(course.version.as_deref(), Some("1.0"));
}
