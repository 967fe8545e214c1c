//! Word counting.

use std::collections::HashMap;

/// Counts whitespace separated words.
pub fn count_words(text: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug)]
struct Report<'a> {
    top: Option<(&'a str, usize)>,
}

fn main() {
    let text = std::env::args().nth(1).unwrap_or_default();
    let counts = count_words(&text);
    let top = counts.iter().max_by_key(|(_, n)| **n).map(|(w, n)| (*w, *n));
    let report = Report { top };
    if let Some((word, n)) = report.top {
        println!("{word}: {n}");
    } else {
        println!("no words");
    }
}
