//! Synthetic instance generation and the substring-free filter.
//!
//! Everything here is data preparation. The solver itself never touches RNG
//! state; generators take a caller-owned RNG so seeded runs reproduce the
//! same instance.

use log::info;
use rand::Rng;

/// Drop every string that is contained in another; survivors keep their
/// input order. Exact duplicates keep the first occurrence only.
pub fn substring_free(strings: Vec<String>) -> Vec<String> {
    let mut kept = Vec::with_capacity(strings.len());
    for (i, s) in strings.iter().enumerate() {
        let contained = strings.iter().enumerate().any(|(j, other)| {
            i != j
                && (other.len() > s.len() || (other.len() == s.len() && j < i))
                && other.contains(s.as_str())
        });
        if !contained {
            kept.push(s.clone());
        }
    }
    if kept.len() < strings.len() {
        info!(
            "substring filter dropped {} of {} strings",
            strings.len() - kept.len(),
            strings.len()
        );
    }
    kept
}

/// Every window of `len` over `text`, each kept with probability
/// `1 - prob`, then substring-free filtered.
///
/// Windows overlap their neighbours by `len - 1`, so surviving sets tend to
/// chain back into the source text. Window offsets index bytes; the text is
/// expected to be ASCII.
pub fn window_sample<R: Rng>(text: &str, len: usize, prob: f64, rng: &mut R) -> Vec<String> {
    if len == 0 || len > text.len() {
        return Vec::new();
    }
    let mut windows = Vec::with_capacity(text.len() - len + 1);
    for start in 0..=text.len() - len {
        if rng.gen::<f64>() > prob {
            windows.push(text[start..start + len].to_string());
        }
    }
    substring_free(windows)
}

/// Cut `text` into consecutive chunks of random length in
/// `[min_len, max_len]`, `repetitions` times over, then substring-free
/// filter the union.
///
/// Each pass stops once the remaining tail is at most `max_len` long; that
/// tail is discarded, so the chunks need not cover the source text. Chunk
/// offsets index bytes; the text is expected to be ASCII.
pub fn slice_sample<R: Rng>(
    text: &str,
    repetitions: usize,
    min_len: usize,
    max_len: usize,
    rng: &mut R,
) -> Vec<String> {
    if min_len == 0 || min_len > max_len {
        return Vec::new();
    }
    let mut chunks = Vec::new();
    for _ in 0..repetitions {
        let mut pos = 0;
        while text.len() - pos > max_len {
            let chunk_len = rng.gen_range(min_len..=max_len);
            chunks.push(text[pos..pos + chunk_len].to_string());
            pos += chunk_len;
        }
    }
    substring_free(chunks)
}

/// Uniform random string over the alphabet's characters; empty when the
/// alphabet is empty.
pub fn random_text<R: Rng>(alphabet: &str, len: usize, rng: &mut R) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return String::new();
    }
    (0..len)
        .map(|_| symbols[rng.gen_range(0..symbols.len())])
        .collect()
}

/// `amount` independent random strings of `len`, substring-free filtered.
/// Degenerate parameters yield an empty instance.
pub fn random_strings<R: Rng>(
    alphabet: &str,
    amount: usize,
    len: usize,
    rng: &mut R,
) -> Vec<String> {
    if alphabet.is_empty() || len == 0 {
        return Vec::new();
    }
    let strings = (0..amount).map(|_| random_text(alphabet, len, rng)).collect();
    substring_free(strings)
}
