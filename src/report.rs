//! Ranking word counts and writing them to an output sink.

use std::collections::HashMap;
use std::io::{self, Write};

/// A destination that accepts one line of report output at a time.
///
/// Blanket-implemented for every [`io::Write`], so the report can go to
/// stdout, a file, or a `Vec<u8>` in tests.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<W: Write> LineSink for W {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self, "{line}")
    }
}

/// Writes a header followed by the `list_count` most frequent words, one
/// `word count` pair per line with the word lowercased.
///
/// Entries are sorted by descending count with a stable sort; words with
/// equal counts keep the mapping's iteration order, which is stable within
/// one run but unspecified across runs. `list_count == 0` writes the header
/// only. All lines reach the sink before the call returns.
pub fn write_word_counts(
    counts: &HashMap<String, u32>,
    sink: &mut impl LineSink,
    list_count: usize,
) -> io::Result<()> {
    sink.write_line(&format!(
        "The number of counts for top {list_count} words:"
    ))?;

    let mut ranked: Vec<(&String, &u32)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1));

    for (word, count) in ranked.into_iter().take(list_count) {
        sink.write_line(&format!("{} {}", word.to_lowercase(), count))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(counts: &HashMap<String, u32>, list_count: usize) -> Vec<String> {
        let mut sink = Vec::new();
        write_word_counts(counts, &mut sink, list_count).unwrap();
        String::from_utf8(sink)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn counts_of(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
        pairs.iter().map(|&(w, c)| (w.to_string(), c)).collect()
    }

    #[test]
    fn header_names_the_requested_count() {
        let lines = render(&HashMap::new(), 10);
        assert_eq!(lines, ["The number of counts for top 10 words:"]);
    }

    #[test]
    fn zero_list_count_writes_header_only() {
        let counts = counts_of(&[("alpha", 3), ("beta", 1)]);
        let lines = render(&counts, 0);
        assert_eq!(lines, ["The number of counts for top 0 words:"]);
    }

    #[test]
    fn entries_are_capped_and_non_increasing() {
        let counts = counts_of(&[("a", 5), ("b", 2), ("c", 9), ("d", 2), ("e", 7)]);
        let lines = render(&counts, 3);
        assert_eq!(lines.len(), 4);
        let counts_out: Vec<u32> = lines[1..]
            .iter()
            .map(|l| l.rsplit(' ').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(counts_out, [9, 7, 5]);
    }

    #[test]
    fn fewer_distinct_words_than_requested() {
        let counts = counts_of(&[("only", 4)]);
        let lines = render(&counts, 50);
        assert_eq!(lines, ["The number of counts for top 50 words:", "only 4"]);
    }

    #[test]
    fn words_are_rendered_lowercase() {
        let mut counts = HashMap::new();
        counts.insert("Mixed".to_string(), 2);
        let lines = render(&counts, 5);
        assert_eq!(lines[1], "mixed 2");
    }

    #[test]
    fn highest_count_comes_first_with_ties_after() {
        let counts = counts_of(&[("the", 2), ("cat", 1), ("sat", 1), ("mat", 1)]);
        let lines = render(&counts, 10);
        assert_eq!(lines[0], "The number of counts for top 10 words:");
        assert_eq!(lines[1], "the 2");
        // The three tied words follow in some stable order, each with count 1.
        let mut tail: Vec<&str> = lines[2..].iter().map(String::as_str).collect();
        tail.sort_unstable();
        assert_eq!(tail, ["cat 1", "mat 1", "sat 1"]);
    }
}
