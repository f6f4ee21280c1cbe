use super::*;

fn courses() -> Vec<Course> {
    vec![
        Course::new("Intro to X", "beginner", "https://x"),
        Course::new("Adv Y", "advanced", "https://y"),
        Course::new("Intro to Z", "beginner", "https://z"),
    ]
}

#[test]
fn all_sentinel_parses_to_all() {
    assert_eq!(FilterKey::parse("all"), FilterKey::All);
    assert_eq!(FilterKey::All.to_string(), "all");
}

#[test]
fn other_keys_are_levels_verbatim() {
    assert_eq!(
        FilterKey::parse("Advanced"),
        FilterKey::Level("Advanced".to_string())
    );
    assert_eq!(FilterKey::from("beginner").as_str(), "beginner");
}

#[test]
fn all_is_identity_in_original_order() {
    let courses = courses();
    let titles: Vec<&str> = filter_courses(&courses, &FilterKey::All)
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Intro to X", "Adv Y", "Intro to Z"]);
}

#[test]
fn level_filter_is_exact_and_ordered() {
    let courses = courses();
    let titles: Vec<&str> = filter_courses(&courses, &FilterKey::parse("beginner"))
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Intro to X", "Intro to Z"]);
    assert!(filter_courses(&courses, &FilterKey::parse("Beginner")).is_empty());
}
