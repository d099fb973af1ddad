// 🎲 Record Synthesizer
// Per-field generation rules for both record variants. All randomness is
// drawn from the injected Rng so tests can run against a seeded source.

use crate::records::{DataRecord, MultiDateRecord, RecordMetadata};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

// ============================================================================
// VOCABULARIES
// ============================================================================

/// Domains for synthesized email addresses
pub const EMAIL_DOMAINS: [&str; 5] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "example.com",
    "test.org",
];

/// Tag vocabulary; each record samples 1-5 entries without replacement
pub const TAG_VOCABULARY: [&str; 14] = [
    "python",
    "javascript",
    "api",
    "web",
    "mobile",
    "data",
    "ai",
    "ml",
    "backend",
    "frontend",
    "database",
    "cloud",
    "devops",
    "security",
];

/// Departments for the metadata object
pub const DEPARTMENTS: [&str; 5] = ["Engineering", "Marketing", "Sales", "HR", "Finance"];

/// Locations for the metadata object
pub const LOCATIONS: [&str; 5] = ["New York", "San Francisco", "London", "Tokyo", "Berlin"];

/// Skill vocabulary; each metadata object samples 2-4 entries
pub const SKILLS: [&str; 6] = ["Python", "Java", "React", "Node.js", "SQL", "Docker"];

/// Textual rendering for ISO datetimes (microsecond precision, no offset)
const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

// ============================================================================
// FIELD HELPERS
// ============================================================================

fn random_string<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

fn random_email<R: Rng>(rng: &mut R) -> String {
    let local = random_string(rng, 8).to_lowercase();
    let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];
    format!("{local}@{domain}")
}

/// Build a v4 UUID from the injected RNG instead of the crate's own source,
/// so a seeded test RNG controls every random bit of a record.
fn random_uuid<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from_bytes(bytes)
}

/// Sample `count` distinct entries in randomized order.
fn sample_without_replacement<R: Rng>(rng: &mut R, vocabulary: &[&str], count: usize) -> Vec<String> {
    let mut pool: Vec<&str> = vocabulary.to_vec();
    pool.shuffle(rng);
    pool.truncate(count);
    pool.into_iter().map(String::from).collect()
}

fn random_tags<R: Rng>(rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(1..=5);
    sample_without_replacement(rng, &TAG_VOCABULARY, count)
}

fn random_metadata<R: Rng>(rng: &mut R) -> RecordMetadata {
    let skill_count = rng.gen_range(2..=4);
    RecordMetadata {
        department: DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())].to_string(),
        location: LOCATIONS[rng.gen_range(0..LOCATIONS.len())].to_string(),
        experience_years: rng.gen_range(1..=20),
        skills: sample_without_replacement(rng, &SKILLS, skill_count),
        certification: rng.gen(),
        last_login: now_iso(),
    }
}

/// Random calendar date with year 1940-2005. The day is capped at 28 for
/// every month so no invalid date can be formed.
fn random_birth_date<R: Rng>(rng: &mut R) -> NaiveDate {
    NaiveDate::from_ymd_opt(
        rng.gen_range(1940..=2005),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28),
    )
    .expect("day capped at 28 is valid in every month")
}

/// Random instant for the multi-date variant: year/month/day/hour/minute are
/// randomized while seconds and sub-seconds keep their wall-clock value at
/// generation time.
fn random_created_instant<R: Rng>(rng: &mut R) -> NaiveDateTime {
    let now = Utc::now();
    let date = NaiveDate::from_ymd_opt(
        rng.gen_range(2020..=2024),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28),
    )
    .expect("day capped at 28 is valid in every month");
    let time = NaiveTime::from_hms_nano_opt(
        rng.gen_range(0..=23),
        rng.gen_range(0..=59),
        now.second(),
        now.nanosecond(),
    )
    .expect("second and nanosecond come from a valid instant");
    NaiveDateTime::new(date, time)
}

fn now_iso() -> String {
    Utc::now().naive_utc().format(ISO_DATETIME_FORMAT).to_string()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// RECORD GENERATION
// ============================================================================

/// Synthesize one standard record for the given identity.
///
/// Total over its domain; every call draws fresh values, so two calls with
/// the same identity agree only on `id`.
pub fn generate_record<R: Rng>(rng: &mut R, id: u64) -> DataRecord {
    DataRecord {
        id,
        uuid: random_uuid(rng),
        name: format!("User {}", random_string(rng, 6)),
        email: random_email(rng),
        age: rng.gen_range(18..=80),
        height: round2(rng.gen_range(150.0..=200.0)),
        weight: round2(rng.gen_range(45.0..=120.0)),
        is_active: rng.gen(),
        balance: round2(rng.gen_range(0.0..=100_000.0)),
        birth_date: random_birth_date(rng).format("%Y-%m-%d").to_string(),
        created_at: now_iso(),
        tags: random_tags(rng),
        metadata: random_metadata(rng),
        score: rng
            .gen_bool(0.5)
            .then(|| round2(rng.gen_range(0.0..=100.0))),
        description: rng
            .gen_bool(0.5)
            .then(|| format!("This is a sample description for user {id}")),
    }
}

/// Synthesize one multi-date record for the given identity.
///
/// The four birth renderings come from a single [`NaiveDate`] and the three
/// creation renderings from a single [`NaiveDateTime`], so every rendering
/// within the record decodes to the same underlying value.
pub fn generate_multi_date_record<R: Rng>(rng: &mut R, id: u64) -> MultiDateRecord {
    let birth_date = random_birth_date(rng);
    let created = random_created_instant(rng);

    MultiDateRecord {
        id,
        uuid: random_uuid(rng),
        name: format!("User {}", random_string(rng, 6)),
        email: random_email(rng),
        age: rng.gen_range(18..=80),
        height: round2(rng.gen_range(150.0..=200.0)),
        weight: round2(rng.gen_range(45.0..=120.0)),
        is_active: rng.gen(),
        balance: round2(rng.gen_range(0.0..=100_000.0)),
        birth_date_iso: birth_date.format("%Y-%m-%d").to_string(),
        birth_date_us: birth_date.format("%m/%d/%Y").to_string(),
        birth_date_eu: birth_date.format("%d/%m/%Y").to_string(),
        birth_date_long: birth_date.format("%B %d, %Y").to_string(),
        created_at_iso: created.format(ISO_DATETIME_FORMAT).to_string(),
        created_at_timestamp: created.and_utc().timestamp(),
        created_at_readable: created.format("%a, %b %d %Y %I:%M %p").to_string(),
        tags: random_tags(rng),
        metadata: random_metadata(rng),
        score: rng
            .gen_bool(0.5)
            .then(|| round2(rng.gen_range(0.0..=100.0))),
        description: rng
            .gen_bool(0.5)
            .then(|| format!("This is a sample description for user {id}")),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_numeric_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for id in 1..=100 {
            let record = generate_record(&mut rng, id);

            assert!((18..=80).contains(&record.age));
            assert!((150.0..=200.0).contains(&record.height));
            assert!((45.0..=120.0).contains(&record.weight));
            assert!((0.0..=100_000.0).contains(&record.balance));
            if let Some(score) = record.score {
                assert!((0.0..=100.0).contains(&score));
            }
        }
    }

    #[test]
    fn test_monetary_and_measure_fields_round_to_two_decimals() {
        let mut rng = StdRng::seed_from_u64(7);

        for id in 1..=50 {
            let record = generate_record(&mut rng, id);
            for value in [record.height, record.weight, record.balance] {
                let scaled = value * 100.0;
                assert!(
                    (scaled - scaled.round()).abs() < 1e-6,
                    "{value} is not rounded to 2 decimals"
                );
            }
        }
    }

    #[test]
    fn test_name_and_email_shapes() {
        let mut rng = StdRng::seed_from_u64(11);
        let record = generate_record(&mut rng, 1);

        let suffix = record.name.strip_prefix("User ").expect("name prefix");
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));

        let (local, domain) = record.email.split_once('@').expect("email has @");
        assert_eq!(local.len(), 8);
        assert_eq!(local, local.to_lowercase());
        assert!(EMAIL_DOMAINS.contains(&domain));
    }

    #[test]
    fn test_uuid_is_v4_and_rng_driven() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = random_uuid(&mut rng);
        let b = random_uuid(&mut rng);

        assert_eq!(a.get_version_num(), 4);
        assert_ne!(a, b);

        // Same seed, same UUID: the injected RNG is the only source of bits
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(a, random_uuid(&mut rng2));
    }

    #[test]
    fn test_tags_are_distinct_and_bounded() {
        let mut rng = StdRng::seed_from_u64(3);

        for id in 1..=200 {
            let record = generate_record(&mut rng, id);

            assert!((1..=5).contains(&record.tags.len()));
            let unique: HashSet<&String> = record.tags.iter().collect();
            assert_eq!(unique.len(), record.tags.len(), "duplicate tag");
            for tag in &record.tags {
                assert!(TAG_VOCABULARY.contains(&tag.as_str()));
            }
        }
    }

    #[test]
    fn test_metadata_fields_come_from_vocabularies() {
        let mut rng = StdRng::seed_from_u64(5);

        for id in 1..=200 {
            let metadata = generate_record(&mut rng, id).metadata;

            assert!(DEPARTMENTS.contains(&metadata.department.as_str()));
            assert!(LOCATIONS.contains(&metadata.location.as_str()));
            assert!((1..=20).contains(&metadata.experience_years));
            assert!((2..=4).contains(&metadata.skills.len()));
            let unique: HashSet<&String> = metadata.skills.iter().collect();
            assert_eq!(unique.len(), metadata.skills.len(), "duplicate skill");
            for skill in &metadata.skills {
                assert!(SKILLS.contains(&skill.as_str()));
            }
        }
    }

    #[test]
    fn test_optionals_occur_in_both_states() {
        let mut rng = StdRng::seed_from_u64(9);
        let records: Vec<_> = (1..=200).map(|id| generate_record(&mut rng, id)).collect();

        let scores_present = records.iter().filter(|r| r.score.is_some()).count();
        let descriptions_present = records.iter().filter(|r| r.description.is_some()).count();

        assert!(scores_present > 0 && scores_present < records.len());
        assert!(descriptions_present > 0 && descriptions_present < records.len());

        // Independent draws: the two options disagree somewhere in the sample
        assert!(records
            .iter()
            .any(|r| r.score.is_some() != r.description.is_some()));
    }

    #[test]
    fn test_description_embeds_the_identity() {
        let mut rng = StdRng::seed_from_u64(13);

        let described = (1..=100)
            .map(|id| generate_record(&mut rng, id))
            .find(|r| r.description.is_some())
            .expect("some record has a description");
        assert_eq!(
            described.description.unwrap(),
            format!("This is a sample description for user {}", described.id)
        );
    }

    #[test]
    fn test_birth_date_range() {
        let mut rng = StdRng::seed_from_u64(17);

        for id in 1..=100 {
            let record = generate_record(&mut rng, id);
            let date = NaiveDate::parse_from_str(&record.birth_date, "%Y-%m-%d").unwrap();

            assert!((1940..=2005).contains(&chrono::Datelike::year(&date)));
            assert!(chrono::Datelike::day(&date) <= 28);
        }
    }

    #[test]
    fn test_created_at_parses_as_iso_datetime() {
        let mut rng = StdRng::seed_from_u64(19);
        let record = generate_record(&mut rng, 1);

        NaiveDateTime::parse_from_str(&record.created_at, "%Y-%m-%dT%H:%M:%S%.f").unwrap();
        NaiveDateTime::parse_from_str(&record.metadata.last_login, "%Y-%m-%dT%H:%M:%S%.f")
            .unwrap();
    }

    #[test]
    fn test_birth_renderings_decode_to_one_date() {
        let mut rng = StdRng::seed_from_u64(21);

        for id in 1..=50 {
            let record = generate_multi_date_record(&mut rng, id);

            let iso = NaiveDate::parse_from_str(&record.birth_date_iso, "%Y-%m-%d").unwrap();
            let us = NaiveDate::parse_from_str(&record.birth_date_us, "%m/%d/%Y").unwrap();
            let eu = NaiveDate::parse_from_str(&record.birth_date_eu, "%d/%m/%Y").unwrap();
            let long = NaiveDate::parse_from_str(&record.birth_date_long, "%B %d, %Y").unwrap();

            assert_eq!(iso, us);
            assert_eq!(iso, eu);
            assert_eq!(iso, long);
        }
    }

    #[test]
    fn test_created_renderings_decode_to_one_instant() {
        let mut rng = StdRng::seed_from_u64(23);

        for id in 1..=50 {
            let record = generate_multi_date_record(&mut rng, id);

            let iso =
                NaiveDateTime::parse_from_str(&record.created_at_iso, "%Y-%m-%dT%H:%M:%S%.f")
                    .unwrap();
            assert_eq!(iso.and_utc().timestamp(), record.created_at_timestamp);

            // The readable rendering carries minute precision
            let readable = NaiveDateTime::parse_from_str(
                &record.created_at_readable,
                "%a, %b %d %Y %I:%M %p",
            )
            .unwrap();
            assert_eq!(readable.date(), iso.date());
            assert_eq!(readable.hour(), iso.hour());
            assert_eq!(readable.minute(), iso.minute());
        }
    }

    #[test]
    fn test_created_instant_field_ranges() {
        let mut rng = StdRng::seed_from_u64(29);

        for _ in 0..100 {
            let instant = random_created_instant(&mut rng);
            assert!((2020..=2024).contains(&chrono::Datelike::year(&instant)));
            assert!(chrono::Datelike::day(&instant) <= 28);
        }
    }

    #[test]
    fn test_multi_date_record_keeps_non_date_rules() {
        let mut rng = StdRng::seed_from_u64(31);
        let record = generate_multi_date_record(&mut rng, 42);

        assert_eq!(record.id, 42);
        assert!(record.name.starts_with("User "));
        assert!((18..=80).contains(&record.age));
        assert!((1..=5).contains(&record.tags.len()));
        assert!((2..=4).contains(&record.metadata.skills.len()));
    }
}
