//! Shared fixtures for unit tests.
//!
//! Mirrors the demo collection endpoint: twelve users split into two server pages of six.

use crate::model::Record;

const USERS: [(&str, &str); 12] = [
    ("George", "Bluth"),
    ("Janet", "Weaver"),
    ("Emma", "Wong"),
    ("Eve", "Holt"),
    ("Charles", "Morris"),
    ("Tracey", "Ramos"),
    ("Michael", "Lawson"),
    ("Lindsay", "Ferguson"),
    ("Tobias", "Funke"),
    ("Byron", "Fields"),
    ("George", "Edwards"),
    ("Rachel", "Howell"),
];

/// User `id` (1-based) of the demo collection.
pub fn reqres_user(id: u64) -> Record {
    let (first, last) = USERS[(id as usize - 1) % USERS.len()];
    Record::new(id)
        .with_first_name(first)
        .with_last_name(last)
        .with_email(format!(
            "{}.{}@reqres.in",
            first.to_lowercase(),
            last.to_lowercase()
        ))
        .with_avatar(format!("https://reqres.in/img/faces/{id}-image.jpg"))
}

/// The demo collection as two server pages of six.
pub fn reqres_pages() -> Vec<Vec<Record>> {
    vec![
        (1..=6).map(reqres_user).collect(),
        (7..=12).map(reqres_user).collect(),
    ]
}
