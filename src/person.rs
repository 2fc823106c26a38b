use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::sequences;

/// Example payload record. Two people are the same person when every field
/// matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub department: String,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, department: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            department: department.into(),
        }
    }
}

pub const ADULT_AGE: u32 = 18;

pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("Alice", 25, "Engineering"),
        Person::new("Bob", 30, "Marketing"),
        Person::new("Charlie", 35, "Engineering"),
        Person::new("Diana", 28, "Sales"),
    ]
}

pub fn group_by_department(people: &[Person]) -> IndexMap<String, Vec<Person>> {
    sequences::group_by(people.iter().cloned(), |p| p.department.clone())
}

/// `(adults, minors)`.
pub fn partition_adults(people: &[Person]) -> (Vec<Person>, Vec<Person>) {
    sequences::partition(people, |p| p.age >= ADULT_AGE)
}

pub fn names_in(people: &[Person]) -> Vec<&str> {
    people.iter().map(|p| p.name.as_str()).collect()
}
