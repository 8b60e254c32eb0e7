//! Analyzer Module
//!
//! Pure functions computing metrics from document content. All functions
//! are total over arbitrary input text, stateless, and safe for
//! concurrent unsynchronized calls.

mod sentences;


pub use sentences::count_sentences;

// == Word Count ==
/// Counts maximal whitespace-delimited tokens.
///
/// Leading and trailing whitespace is ignored; empty or whitespace-only
/// text yields 0.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

// == Character Count ==
/// Counts characters (Unicode scalar values) in the text.
///
/// With `include_whitespace` set, every character counts; otherwise
/// whitespace characters are excluded.
pub fn count_characters(text: &str, include_whitespace: bool) -> usize {
    if include_whitespace {
        text.chars().count()
    } else {
        text.chars().filter(|c| !c.is_whitespace()).count()
    }
}

// == Paragraph Count ==
/// Counts blocks separated by one or more blank lines.
///
/// A separator is a whitespace run containing at least two newline
/// characters, so a blank line may carry trailing spaces or tabs.
/// Fragments that are empty after trimming do not count; text that is
/// empty, whitespace-only, or newlines-only yields 0.
pub fn count_paragraphs(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut count = 0;
    let mut has_content = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\n' {
            // Measure the whitespace run starting at this newline
            let mut j = i;
            let mut newlines = 0;
            let mut last_newline = i;
            while j < chars.len() && chars[j].is_whitespace() {
                if chars[j] == '\n' {
                    newlines += 1;
                    last_newline = j;
                }
                j += 1;
            }
            if newlines >= 2 {
                // Blank-line separator: close the current fragment
                if has_content {
                    count += 1;
                }
                has_content = false;
                i = last_newline + 1;
                continue;
            }
        }
        if !c.is_whitespace() {
            has_content = true;
        }
        i += 1;
    }

    if has_content {
        count += 1;
    }
    count
}

// == Longest Words ==
/// Finds the token(s) of maximum character length.
///
/// Tokenization matches [`count_words`]. With `return_all` set, every
/// token attaining the maximum length is returned in document order,
/// duplicates included; otherwise only the first such token. No tokens
/// yields an empty vector in both modes.
pub fn find_longest_words(text: &str, return_all: bool) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let max_len = match words.iter().map(|w| w.chars().count()).max() {
        Some(len) => len,
        None => return Vec::new(),
    };

    let mut longest = words
        .into_iter()
        .filter(|w| w.chars().count() == max_len)
        .map(String::from);

    if return_all {
        longest.collect()
    } else {
        longest.next().into_iter().collect()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_empty() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("\t\n  \n"), 0);
    }

    #[test]
    fn test_count_words_basic() {
        assert_eq!(count_words("Hello world"), 2);
        assert_eq!(count_words("  Hello   world  "), 2);
        assert_eq!(count_words("one"), 1);
    }

    #[test]
    fn test_count_words_punctuation_is_not_a_separator() {
        // Only whitespace separates tokens
        assert_eq!(count_words("Hello,world!How are you?"), 3);
    }

    #[test]
    fn test_count_characters_with_whitespace() {
        assert_eq!(count_characters("", true), 0);
        assert_eq!(count_characters("abc def", true), 7);
        assert_eq!(count_characters("a\nb", true), 3);
    }

    #[test]
    fn test_count_characters_without_whitespace() {
        assert_eq!(count_characters("", false), 0);
        assert_eq!(count_characters("abc def", false), 6);
        assert_eq!(count_characters(" \t\n ", false), 0);
    }

    #[test]
    fn test_count_characters_unicode() {
        // char count, not byte count
        assert_eq!(count_characters("héllo", true), 5);
    }

    #[test]
    fn test_count_paragraphs_basic() {
        assert_eq!(count_paragraphs("Para 1.\n\nPara 2.\n\n\nPara 3."), 3);
        assert_eq!(count_paragraphs("single paragraph"), 1);
    }

    #[test]
    fn test_count_paragraphs_single_newline_does_not_split() {
        assert_eq!(count_paragraphs("line one\nline two"), 1);
    }

    #[test]
    fn test_count_paragraphs_blank_line_with_trailing_whitespace() {
        assert_eq!(count_paragraphs("Para 1.\n  \t\nPara 2."), 2);
    }

    #[test]
    fn test_count_paragraphs_empty_inputs() {
        assert_eq!(count_paragraphs(""), 0);
        assert_eq!(count_paragraphs("   "), 0);
        assert_eq!(count_paragraphs("\n\n\n"), 0);
    }

    #[test]
    fn test_count_paragraphs_leading_and_trailing_blank_lines() {
        assert_eq!(count_paragraphs("\n\nPara 1.\n\n"), 1);
    }

    #[test]
    fn test_find_longest_words_all() {
        assert_eq!(
            find_longest_words("apple banana cherry", true),
            vec!["banana".to_string(), "cherry".to_string()]
        );
    }

    #[test]
    fn test_find_longest_words_first_only() {
        assert_eq!(
            find_longest_words("apple banana cherry", false),
            vec!["banana".to_string()]
        );
    }

    #[test]
    fn test_find_longest_words_duplicates_preserved() {
        assert_eq!(
            find_longest_words("banana cherry banana", true),
            vec!["banana", "cherry", "banana"]
        );
    }

    #[test]
    fn test_find_longest_words_empty() {
        assert!(find_longest_words("", true).is_empty());
        assert!(find_longest_words("   ", false).is_empty());
    }

    #[test]
    fn test_find_longest_words_length_by_chars() {
        // "héllo" is 5 chars even though it is 6 bytes
        assert_eq!(find_longest_words("héllo worlds", false), vec!["worlds"]);
        assert_eq!(find_longest_words("héllo world", true), vec!["héllo", "world"]);
    }
}
