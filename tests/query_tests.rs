use roster_query::{query, Student};
use rstest::rstest;

fn roster() -> Vec<Student> {
    vec![
        Student::new(7, "Grace", "Hopper", "M3439"),
        Student::new(2, "Alan", "Turing", "M3438"),
        Student::new(5, "Ada", "Lovelace", "M3439"),
        Student::new(1, "Edsger", "Dijkstra", "M3438"),
        Student::new(4, "Ada", "Hopper", "M3439"),
    ]
}

#[test]
fn extraction_matches_input_positionally() {
    let students = roster();
    let firsts = query::first_names(&students);
    let lasts = query::last_names(&students);
    let fulls = query::full_names(&students);
    assert_eq!(firsts.len(), students.len());
    for (i, student) in students.iter().enumerate() {
        assert_eq!(firsts[i], student.first_name);
        assert_eq!(lasts[i], student.last_name);
        assert_eq!(fulls[i], format!("{} {}", student.first_name, student.last_name));
    }
}

#[test]
fn sorted_by_id_is_ascending_and_idempotent() {
    let once = query::sorted_by_id(&roster());
    let ids: Vec<u64> = once.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 5, 7]);
    assert_eq!(query::sorted_by_id(&once), once);
}

#[test]
fn sorted_by_name_orders_by_last_first_id() {
    let sorted = query::sorted_by_name(&roster());
    let fulls = query::full_names(&sorted);
    assert_eq!(
        fulls,
        vec![
            "Edsger Dijkstra",
            "Ada Hopper",
            "Grace Hopper",
            "Ada Lovelace",
            "Alan Turing",
        ]
    );
    assert_eq!(query::sorted_by_name(&sorted), sorted);
}

#[rstest]
#[case::existing_group("M3439", vec![4, 7, 5])]
#[case::other_group("M3438", vec![1, 2])]
#[case::unknown_group("M9999", vec![])]
fn find_by_group_filters_and_sorts(#[case] group: &str, #[case] expected_ids: Vec<u64>) {
    let found = query::find_by_group(&roster(), group);
    let ids: Vec<u64> = found.iter().map(|s| s.id).collect();
    assert_eq!(ids, expected_ids);
    assert!(found.iter().all(|s| s.group == group));
}

#[rstest]
#[case::shared_first_name("Ada", vec![4, 5])]
#[case::unique_first_name("Grace", vec![7])]
#[case::missing("Zelda", vec![])]
fn find_by_first_name_exact_match(#[case] name: &str, #[case] expected_ids: Vec<u64>) {
    let ids: Vec<u64> = query::find_by_first_name(&roster(), name)
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, expected_ids);
}

#[rstest]
#[case::shared_last_name("Hopper", vec![4, 7])]
#[case::missing("Curie", vec![])]
fn find_by_last_name_exact_match(#[case] name: &str, #[case] expected_ids: Vec<u64>) {
    let ids: Vec<u64> = query::find_by_last_name(&roster(), name)
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, expected_ids);
}

#[test]
fn names_by_group_resolves_collisions_deterministically() {
    // Grace Hopper and Ada Hopper are both in M3439: the map keeps "Ada".
    let names = query::names_by_group(&roster(), "M3439");
    assert_eq!(names.len(), 2);
    assert_eq!(names["Hopper"], "Ada");
    assert_eq!(names["Lovelace"], "Ada");
}

#[test]
fn min_student_first_name_is_by_id_not_by_letters() {
    // Lowest id is 1 (Edsger), even though "Ada" sorts first.
    assert_eq!(query::min_student_first_name(&roster()), "Edsger");

    let single = vec![Student::new(42, "Zz", "Zz", "G")];
    assert_eq!(query::min_student_first_name(&single), "Zz");
    assert_eq!(query::min_student_first_name(&[]), "");
}

#[test]
fn input_is_never_mutated() {
    let students = roster();
    let before = students.clone();
    let _ = query::sorted_by_name(&students);
    let _ = query::find_by_group(&students, "M3439");
    let _ = query::distinct_first_names(&students);
    assert_eq!(students, before);
}
