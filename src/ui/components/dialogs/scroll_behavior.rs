//! Scroll offset bookkeeping shared by the chat history and the dialogs.
//!
//! Offsets are counted in lines from the top. Views clamp the offset to
//! their content when rendering, so scrolling past the end is harmless.

use ratatui::widgets::ScrollbarState;

const PAGE: usize = 10;

pub fn scroll_up(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_sub(1);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn scroll_down(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_add(1);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn page_up(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_sub(PAGE);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn page_down(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_add(PAGE);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn scroll_to_top(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = 0;
    *scrollbar_state = scrollbar_state.position(0);
}

/// Clamp `scroll_offset` to the content and return the visible window.
pub fn visible_window<'a, T>(
    lines: &'a [T],
    visible_height: usize,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) -> &'a [T] {
    let max_scroll = lines.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(lines.len())
        .viewport_content_length(visible_height)
        .position(*scroll_offset);

    let end = (*scroll_offset + visible_height).min(lines.len());
    &lines[*scroll_offset..end]
}
