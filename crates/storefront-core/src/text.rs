//! Display helpers for product cards and cart lines.

/// Shortens `text` to at most `max_chars` characters followed by `...`.
///
/// Text that already fits is returned unchanged. Counts characters, not
/// bytes, so multi-byte titles are never split mid-character.
///
/// ```rust
/// use storefront_core::text::truncate_text;
///
/// assert_eq!(truncate_text("Blue Hat", 20), "Blue Hat");
/// assert_eq!(truncate_text("Mens Casual Premium Slim Fit", 10), "Mens Casua...");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
