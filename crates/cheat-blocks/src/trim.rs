//! Removal of heading decoration from raw blocks

use serde::Deserialize;

/// Turns a block's raw lines into its published content.
pub trait Trimmer {
    fn trim(&self, raw: &[String]) -> Vec<String>;

    /// Trim the implicit leading block, which has no heading decoration.
    fn trim_start_block(&self, raw: &[String]) -> Vec<String> {
        self.trim(raw)
    }
}

impl<F> Trimmer for F
where
    F: Fn(&[String]) -> Vec<String>,
{
    fn trim(&self, raw: &[String]) -> Vec<String> {
        self(raw)
    }
}

/// Fixed-width trimming with optional blank-edge removal.
///
/// `leading` and `trailing` lines are dropped first. With `trim_blank`, one
/// more line is then dropped at each end if it is whitespace-only. Widths
/// larger than the block yield an empty block rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrimRule {
    pub leading: usize,
    pub trailing: usize,
    pub trim_blank: bool,
}

impl TrimRule {
    pub const fn new(leading: usize, trailing: usize, trim_blank: bool) -> Self {
        Self {
            leading,
            trailing,
            trim_blank,
        }
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

impl Trimmer for TrimRule {
    fn trim(&self, raw: &[String]) -> Vec<String> {
        let end = raw.len().saturating_sub(self.trailing);
        let start = self.leading.min(end);
        let mut lines = &raw[start..end];

        if self.trim_blank {
            if let Some((first, rest)) = lines.split_first()
                && is_blank(first)
            {
                lines = rest;
            }
            if let Some((last, rest)) = lines.split_last()
                && is_blank(last)
            {
                lines = rest;
            }
        }

        lines.to_vec()
    }

    /// Only the blank-edge part of the rule applies; the fixed widths are
    /// sized for heading decoration.
    fn trim_start_block(&self, raw: &[String]) -> Vec<String> {
        TrimRule::new(0, 0, self.trim_blank).trim(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let rule = TrimRule::new(3, 1, true);
        assert!(rule.trim(&[]).is_empty());
    }

    #[test]
    fn test_widths_larger_than_block() {
        let rule = TrimRule::new(2, 2, false);
        assert!(rule.trim(&lines(&["a", "b", "c"])).is_empty());
    }

    #[test]
    fn test_fixed_widths() {
        let rule = TrimRule::new(1, 1, false);
        assert_eq!(rule.trim(&lines(&["h", "a", "b", "t"])), lines(&["a", "b"]));
    }

    #[test]
    fn test_whitespace_only_edges_are_blank() {
        let rule = TrimRule::new(0, 0, true);
        assert_eq!(
            rule.trim(&lines(&["   ", "keep", "\t"])),
            lines(&["keep"])
        );
    }

    #[test]
    fn test_only_one_blank_line_per_edge() {
        let rule = TrimRule::new(0, 0, true);
        assert_eq!(
            rule.trim(&lines(&["", "", "x", "", ""])),
            lines(&["", "x", ""])
        );
    }

    #[test]
    fn test_blank_edges_kept_without_flag() {
        let rule = TrimRule::new(0, 0, false);
        assert_eq!(rule.trim(&lines(&["", "x", ""])), lines(&["", "x", ""]));
    }

    #[test]
    fn test_single_blank_line_collapses() {
        let rule = TrimRule::new(0, 0, true);
        assert!(rule.trim(&lines(&[" "])).is_empty());
    }

    #[test]
    fn test_start_block_ignores_fixed_widths() {
        let rule = TrimRule::new(3, 1, true);
        let raw = lines(&["-- comment", "", "--[[", "note", "--]]", ""]);
        assert_eq!(
            rule.trim_start_block(&raw),
            lines(&["-- comment", "", "--[[", "note", "--]]"])
        );
        assert_eq!(
            TrimRule::new(3, 0, false).trim_start_block(&raw),
            raw
        );
    }

    #[test]
    fn test_closure_trimmer() {
        let drop_first = |raw: &[String]| raw.iter().skip(1).cloned().collect::<Vec<_>>();
        assert_eq!(drop_first.trim(&lines(&["a", "b"])), lines(&["b"]));
    }
}
