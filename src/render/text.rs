// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::canvas::Canvas;

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text_len(text) <= max_len {
        return text.to_owned();
    }
    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Canvas contents with trailing spaces and trailing blank rows removed.
pub(crate) fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let rendered = canvas.to_string();
    let mut lines = rendered
        .split('\n')
        .map(|line| line.trim_end_matches(' '))
        .collect::<Vec<_>>();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{canvas_to_string_trimmed, text_len, truncate_with_ellipsis};
    use crate::render::canvas::Canvas;

    #[test]
    fn truncate_with_ellipsis_handles_small_widths() {
        assert_eq!(truncate_with_ellipsis("Produce", 0), "");
        assert_eq!(truncate_with_ellipsis("Produce", 1), "…");
        assert_eq!(truncate_with_ellipsis("P", 1), "P");
        assert_eq!(truncate_with_ellipsis("Produce", 4), "Pro…");
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(text_len("Café"), 4);
        assert_eq!(truncate_with_ellipsis("Café au lait", 4), "Caf…");
    }

    #[test]
    fn trims_trailing_spaces_and_blank_rows() {
        let mut canvas = Canvas::new(3, 3).expect("canvas");
        canvas.set(0, 0, 'A').expect("set");
        canvas.set(1, 1, 'B').expect("set");
        assert_eq!(canvas_to_string_trimmed(&canvas), "A\n B");
    }
}
