//! Benchmarking support for the city search engine.
//!
//! Generates synthetic record sets shaped like a city list: many short names
//! sharing a few common prefixes, plus a long tail of unique ones.

/// Syllables combined into synthetic city names.
const SYLLABLES: &[&str] = &[
    "san", "ta", "ma", "ri", "ber", "lin", "po", "rt", "van", "cou", "ver", "os", "lo", "ka",
    "ham", "burg", "ville", "ton", "field", "ne",
];

/// Returns `count` deterministic, mixed-case city-like names.
pub fn synthetic_records(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut name = String::new();
            let mut n = i;
            loop {
                name.push_str(SYLLABLES[n % SYLLABLES.len()]);
                n /= SYLLABLES.len();
                if n == 0 {
                    break;
                }
            }
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => name,
            }
        })
        .collect()
}
