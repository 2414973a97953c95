//! Synthetic value generation
//!
//! Names come from fixed pools, phone numbers are NANP-shaped, and
//! message timestamps are uniform over a fixed two-year window. The rng
//! never crosses an await point: batches are generated whole, then bound.

use chrono::{DateTime, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Aisha", "Alice", "Amir", "Ana", "Ben", "Carlos", "Carol", "Chen", "Dana", "David", "Elena",
    "Fatima", "Grace", "Hugo", "Ines", "Ivan", "James", "Keiko", "Liam", "Maria", "Noah", "Olga",
    "Priya", "Ravi", "Sofia", "Tomas", "Wei", "Yusuf", "Zara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Ali", "Baker", "Brown", "Chen", "Costa", "Diaz", "Dubois", "Evans", "Garcia",
    "Hansen", "Ito", "Johnson", "Khan", "Kim", "Lee", "Martin", "Muller", "Nguyen", "Okafor",
    "Patel", "Rossi", "Santos", "Silva", "Singh", "Smith", "Tanaka", "Wang", "Weber", "Yilmaz",
];

/// Message timestamps fall in [2022-01-01, 2024-01-01).
fn timestamp_bounds() -> (i64, i64) {
    let from = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (from.timestamp(), to.timestamp())
}

fn full_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES.choose(rng).unwrap();
    let last = LAST_NAMES.choose(rng).unwrap();
    format!("{first} {last}")
}

fn phone_number(rng: &mut impl Rng) -> String {
    format!(
        "+1{:03}{:03}{:04}",
        rng.gen_range(200..1000),
        rng.gen_range(200..1000),
        rng.gen_range(0..10000)
    )
}

/// One batch of contact columns, ready for an UNNEST insert.
pub fn contact_batch(count: usize) -> (Vec<String>, Vec<String>) {
    let mut rng = rand::thread_rng();
    let mut names = Vec::with_capacity(count);
    let mut phones = Vec::with_capacity(count);
    for _ in 0..count {
        names.push(full_name(&mut rng));
        phones.push(phone_number(&mut rng));
    }
    (names, phones)
}

/// One batch of message columns, ready for an UNNEST insert.
pub struct MessageBatch {
    pub contact_ids: Vec<i64>,
    pub bodies: Vec<String>,
    pub timestamps: Vec<DateTime<Utc>>,
}

/// Generate `count` messages assigned uniformly across contact ids
/// `1..=num_contacts`, with bodies drawn uniformly from `corpus`.
pub fn message_batch(count: usize, num_contacts: u64, corpus: &[String]) -> MessageBatch {
    let mut rng = rand::thread_rng();
    let (ts_from, ts_to) = timestamp_bounds();

    let mut batch = MessageBatch {
        contact_ids: Vec::with_capacity(count),
        bodies: Vec::with_capacity(count),
        timestamps: Vec::with_capacity(count),
    };
    for _ in 0..count {
        batch
            .contact_ids
            .push(rng.gen_range(1..=num_contacts) as i64);
        batch.bodies.push(corpus.choose(&mut rng).unwrap().clone());
        let secs = rng.gen_range(ts_from..ts_to);
        batch
            .timestamps
            .push(Utc.timestamp_opt(secs, 0).single().unwrap());
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_batch_shape() {
        let (names, phones) = contact_batch(100);
        assert_eq!(names.len(), 100);
        assert_eq!(phones.len(), 100);
        for name in &names {
            assert!(name.contains(' '), "name {name:?} has no surname");
        }
        for phone in &phones {
            assert!(phone.starts_with("+1"));
            assert_eq!(phone.len(), 12);
            assert!(phone[1..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn message_batch_respects_bounds() {
        let corpus = vec!["hey".to_string(), "on my way".to_string()];
        let batch = message_batch(500, 7, &corpus);

        assert_eq!(batch.contact_ids.len(), 500);
        let (from, to) = timestamp_bounds();
        for id in &batch.contact_ids {
            assert!((1..=7).contains(id));
        }
        for body in &batch.bodies {
            assert!(corpus.contains(body));
        }
        for ts in &batch.timestamps {
            assert!(ts.timestamp() >= from && ts.timestamp() < to);
        }
    }

    #[test]
    fn all_contacts_eventually_drawn() {
        let corpus = vec!["x".to_string()];
        let batch = message_batch(2000, 5, &corpus);
        let mut seen = [false; 5];
        for id in &batch.contact_ids {
            seen[(*id - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "uniform draw missed a contact");
    }
}
