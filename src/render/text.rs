// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to `max_len` characters, marking the cut with `…`.
pub(crate) fn fit_label(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text_len(text) <= max_len {
        return text.to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

/// Column where a label of `len` characters starts when centered in `from..=to`.
pub(crate) fn centered_start(from: i64, to: i64, len: usize) -> i64 {
    let span = to - from + 1;
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    from + (span - len).max(0) / 2
}

#[cfg(test)]
mod tests {
    use super::{centered_start, fit_label, text_len};

    #[test]
    fn fit_label_handles_small_widths() {
        assert_eq!(fit_label("hello", 0), "");
        assert_eq!(fit_label("hello", 1), "…");
        assert_eq!(fit_label("h", 1), "h");
        assert_eq!(fit_label("hello", 3), "he…");
    }

    #[test]
    fn fit_label_counts_chars_not_bytes() {
        assert_eq!(text_len("αβγ"), 3);
        assert_eq!(fit_label("αβγ", 2), "α…");
    }

    #[test]
    fn centers_within_span() {
        assert_eq!(centered_start(0, 9, 4), 3);
        assert_eq!(centered_start(5, 5, 1), 5);
        assert_eq!(centered_start(0, 2, 10), 0);
    }
}
