// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::Letter;
use super::error;

// One word per line, A-Z in either case. Blank lines are skipped.
pub fn parse_words(text: &str) -> error::Returns<Vec<Vec<Letter>>> {
    let mut words = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut word = Vec::with_capacity(line.len());
        for c in line.chars() {
            if !c.is_ascii_alphabetic() {
                return_error!(
                    Lexicon,
                    format!("line {}: {:?} is not a word", line_num + 1, line)
                );
            }
            word.push(c.to_ascii_uppercase() as u8 - b'A');
        }
        words.push(word);
    }
    if words.is_empty() {
        return_error!(Lexicon, "no words".into());
    }
    Ok(words)
}

pub fn read_words<P: AsRef<std::path::Path>>(path: P) -> error::Returns<Vec<Vec<Letter>>> {
    parse_words(&std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Kind, kind_of};

    #[test]
    fn reads_mixed_case_and_skips_blank_lines() {
        let words = parse_words("dog\n\n  Oats \r\nZA\n").unwrap();
        assert_eq!(words, vec![vec![3, 14, 6], vec![14, 0, 19, 18], vec![25, 0]]);
    }

    #[test]
    fn rejects_junk() {
        let err = parse_words("dog\ncan't\n").unwrap_err();
        assert_eq!(kind_of(&err), Some(Kind::Lexicon));
        assert!(err.to_string().contains("line 2"));
        assert_eq!(kind_of(&parse_words("\n\n").unwrap_err()), Some(Kind::Lexicon));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_words("/nonexistent/words.txt").unwrap_err();
        assert_eq!(kind_of(&err), None);
    }
}
