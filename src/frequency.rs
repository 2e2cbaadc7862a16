use std::collections::BTreeMap;

/// Symbol to occurrence count. Ordered so that tree construction seeds its
/// queue in a reproducible order.
pub type FrequencyMap = BTreeMap<char, usize>;

pub fn frequency_map(text: &str) -> FrequencyMap {
    let mut freqs = FrequencyMap::new();

    for symbol in text.chars() {
        let count = freqs.entry(symbol).or_insert(0);
        *count += 1;
    }

    freqs
}

/// Counts distinct symbols, stopping as soon as `limit` is reached.
pub fn distinct_symbols(text: &str, limit: usize) -> usize {
    let mut seen = Vec::<char>::new();

    for symbol in text.chars() {
        if seen.len() >= limit {
            break;
        }
        if !seen.contains(&symbol) {
            seen.push(symbol);
        }
    }

    seen.len()
}
