//! Line measurement contract
//!
//! Real text shaping happens outside this crate. A [`TextMeasure`]
//! implementation reports the pixel width of a run of text; the wrapper below
//! turns free text into measured [`Line`]s with it.

use super::types::Line;

/// Reports the rendered width of a run of text, in px
pub trait TextMeasure {
    fn measure(&self, text: &str) -> f64;
}

/// Every character advances by the same amount (monospace approximation)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    pub advance: f64,
}

impl FixedAdvance {
    pub fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl TextMeasure for FixedAdvance {
    fn measure(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance
    }
}

impl<F: Fn(&str) -> f64> TextMeasure for F {
    fn measure(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Greedy word wrap
///
/// Explicit newlines always break. Within a paragraph, words are packed while
/// the measured line stays within `max_width`; a word wider than `max_width`
/// gets a line of its own. Blank paragraphs become empty lines.
pub fn wrap_text(text: &str, max_width: f64, measurer: &impl TextMeasure) -> Vec<Line> {
    let mut rows: Vec<String> = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{} {}", current, word);
            if measurer.measure(&candidate) <= max_width {
                current = candidate;
            } else {
                rows.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        rows.push(current);
    }

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let width = measurer.measure(&row);
            Line::new(index, row, width)
        })
        .collect()
}

/// Lines for callers that already know the widths
pub fn lines_from_widths(widths: &[f64]) -> Vec<Line> {
    widths
        .iter()
        .enumerate()
        .map(|(index, &width)| Line::new(index, format!("line {}", index + 1), width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_advance() {
        let m = FixedAdvance::new(10.0);
        assert_eq!(m.measure("HI"), 20.0);
        assert_eq!(m.measure(""), 0.0);
        // Counts characters, not bytes
        assert_eq!(m.measure("日本"), 20.0);
    }

    #[test]
    fn test_wrap_packs_words() {
        let lines = wrap_text("the quick brown fox", 90.0, &FixedAdvance::new(10.0));
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["the quick", "brown fox"]);
        assert_eq!(lines[0].width, 90.0);
        assert_eq!(lines[1].index, 1);
    }

    #[test]
    fn test_wrap_long_word_gets_own_line() {
        let lines = wrap_text("a extraordinarily b", 50.0, &FixedAdvance::new(10.0));
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_wrap_keeps_blank_paragraphs() {
        let lines = wrap_text("one\n\ntwo", 100.0, &FixedAdvance::new(10.0));
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_blank());
        assert_eq!(lines[2].index, 2);
    }

    #[test]
    fn test_closure_measurer() {
        let lines = wrap_text("ab", 100.0, &|s: &str| s.len() as f64 * 7.0);
        assert_eq!(lines[0].width, 14.0);
    }

    #[test]
    fn test_lines_from_widths() {
        let lines = lines_from_widths(&[10.0, 20.0]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].width, 20.0);
        assert_eq!(lines[1].index, 1);
        assert!(!lines[1].is_blank());
    }
}
