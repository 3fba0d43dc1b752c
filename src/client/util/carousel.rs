//! Index arithmetic for the team member carousel and the gallery lightbox.

/// Team members visible at once on the about page.
pub const MEMBERS_PER_VIEW: usize = 3;

/// Last valid start index of a carousel window over `len` items.
pub fn max_start(len: usize, per_view: usize) -> usize {
    len.saturating_sub(per_view)
}

/// Advances the window by one item, wrapping back to the first window after the last.
pub fn next_start(current: usize, len: usize, per_view: usize) -> usize {
    if current >= max_start(len, per_view) {
        0
    } else {
        current + 1
    }
}

/// Moves the window back by one item, wrapping to the last window before the first.
pub fn prev_start(current: usize, len: usize, per_view: usize) -> usize {
    let max = max_start(len, per_view);

    if current == 0 || max == 0 {
        max
    } else {
        current.min(max) - 1
    }
}

/// Items shown by the window starting at `start`.
pub fn window<T>(items: &[T], start: usize, per_view: usize) -> &[T] {
    let start = start.min(items.len());
    let end = (start + per_view).min(items.len());
    &items[start..end]
}

/// Next lightbox image, wrapping past the last. An empty set stays at 0.
pub fn next_image(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

/// Previous lightbox image, wrapping before the first. An empty set stays at 0.
pub fn prev_image(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + len - 1) % len
}
