// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;

/// How many bytes of input to show on either side of a failure position.
const CONTEXT_WINDOW: usize = 50;

/// Renders a window of the input around the cursor position, marking the
/// offending byte with a combining low line so the failure is visually
/// locatable in the source text.
///
/// Both the decoder and the validator call this on their failure paths.
pub(crate) fn render_context(cursor: &Cursor) -> String {
    let pos = cursor.pos();
    let before = cursor.slice(pos.saturating_sub(CONTEXT_WINDOW), pos);
    let after_start = pos.saturating_add(1);
    let after = cursor.slice(after_start, after_start.saturating_add(CONTEXT_WINDOW));

    let mut rendered = String::new();
    rendered.push_str(&String::from_utf8_lossy(before));
    if cursor.has_next() {
        // Marking a whitespace byte renders poorly, but the grammar rules
        // that fail here almost always point at a visible byte.
        rendered.push_str(&String::from_utf8_lossy(&[cursor.current()]));
        rendered.push('\u{0333}');
    }
    rendered.push_str(&String::from_utf8_lossy(after));
    rendered
}
