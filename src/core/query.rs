//! Pure query operations over a roster slice.
//!
//! Every function here is a single pass (filter/map/sort) over the input.
//! There is no state and no failure mode: an empty input degrades to an
//! empty list/set/map or an empty string, never an error.

use crate::domain::model::Student;
use std::collections::{HashMap, HashSet};

/// Composite key for name ordering: (last_name, first_name, id).
/// The id tail makes the order total even when names collide.
fn name_key(student: &Student) -> (&str, &str, u64) {
    (&student.last_name, &student.first_name, student.id)
}

/// Projects one field out of each student, preserving input order.
fn collect_field<F>(students: &[Student], field: F) -> Vec<String>
where
    F: Fn(&Student) -> String,
{
    students.iter().map(field).collect()
}

/// Linear scan with an exact-equality predicate on one field.
fn filter_by_field<'a, F>(students: &'a [Student], field: F, value: &str) -> Vec<&'a Student>
where
    F: Fn(&Student) -> &str,
{
    students.iter().filter(|&s| field(s) == value).collect()
}

fn to_sorted_by_name(mut students: Vec<&Student>) -> Vec<Student> {
    students.sort_by(|a, b| name_key(a).cmp(&name_key(b)));
    students.into_iter().cloned().collect()
}

/// First names in input order, one per student.
pub fn first_names(students: &[Student]) -> Vec<String> {
    collect_field(students, |s| s.first_name.clone())
}

/// Last names in input order.
pub fn last_names(students: &[Student]) -> Vec<String> {
    collect_field(students, |s| s.last_name.clone())
}

/// Group labels in input order.
pub fn groups(students: &[Student]) -> Vec<String> {
    collect_field(students, |s| s.group.clone())
}

/// `"first last"` for each student, in input order.
pub fn full_names(students: &[Student]) -> Vec<String> {
    collect_field(students, Student::full_name)
}

/// Unique first names. No order is defined on the result.
pub fn distinct_first_names(students: &[Student]) -> HashSet<String> {
    students.iter().map(|s| s.first_name.clone()).collect()
}

/// First name of the student that is minimal under natural (id) order,
/// or an empty string for an empty roster.
///
/// Note: this is the minimum-id student's first name, not the
/// alphabetically smallest first name.
pub fn min_student_first_name(students: &[Student]) -> String {
    students
        .iter()
        .min()
        .map(|s| s.first_name.clone())
        .unwrap_or_default()
}

/// Roster sorted ascending by id.
pub fn sorted_by_id(students: &[Student]) -> Vec<Student> {
    let mut sorted = students.to_vec();
    sorted.sort();
    sorted
}

/// Roster sorted ascending by (last_name, first_name, id).
pub fn sorted_by_name(students: &[Student]) -> Vec<Student> {
    to_sorted_by_name(students.iter().collect())
}

/// Students whose first name equals `name`, in name order.
pub fn find_by_first_name(students: &[Student], name: &str) -> Vec<Student> {
    to_sorted_by_name(filter_by_field(students, |s| &s.first_name, name))
}

/// Students whose last name equals `name`, in name order.
pub fn find_by_last_name(students: &[Student], name: &str) -> Vec<Student> {
    to_sorted_by_name(filter_by_field(students, |s| &s.last_name, name))
}

/// Students in `group`, in name order.
pub fn find_by_group(students: &[Student], group: &str) -> Vec<Student> {
    to_sorted_by_name(filter_by_field(students, |s| &s.group, group))
}

/// last_name -> first_name for the students in `group`.
///
/// When two students in the group share a last name, the entry keeps the
/// lexicographically smallest first name, so the result is deterministic
/// regardless of input order.
pub fn names_by_group(students: &[Student], group: &str) -> HashMap<String, String> {
    let mut names: HashMap<String, String> = HashMap::new();
    for student in students.iter().filter(|s| s.group == group) {
        names
            .entry(student.last_name.clone())
            .and_modify(|first| {
                if student.first_name < *first {
                    *first = student.first_name.clone();
                }
            })
            .or_insert_with(|| student.first_name.clone());
    }
    names
}
