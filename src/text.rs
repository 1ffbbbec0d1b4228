/// Pure function: collapse whitespace runs to single spaces and trim.
///
/// Applied to heading text and every cell before matching or storage, so
/// source-HTML indentation never leaks into comparisons or column widths.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(normalize("  a \t b\n\n c  "), "a b c");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn idempotent() {
        for s in ["", "  x ", "a\tb", "already normal", "\u{a0}a", "a  b   c"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }
}
