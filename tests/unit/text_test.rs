//! Unit tests for escape-aware text measurement and fitting

use dashkit::text::{
    ellipsize, pad, scan, strip_control, trim_unterminated, truncate, visible_width, Segment,
};
use dashkit::theme::RESET;
use dashkit::Align;

// ============================================================================
// visible_width
// ============================================================================

#[test]
fn width_of_empty_string_is_zero() {
    assert_eq!(visible_width(""), 0);
}

#[test]
fn width_ignores_color_codes() {
    assert_eq!(visible_width("\x1b[1;32mREADY\x1b[0m"), 5);
    assert_eq!(visible_width("\x1b[38;5;208mo\x1b[0mk"), 2);
}

#[test]
fn width_counts_wide_characters_twice() {
    assert_eq!(visible_width("日本"), 4);
    assert_eq!(visible_width("a日b"), 4);
}

#[test]
fn width_of_open_sequence_swallows_the_rest() {
    assert_eq!(visible_width("ab\x1b[31;2 "), 2);
}

#[test]
fn open_sequence_ends_at_the_first_letter() {
    // `m` of "more" closes the sequence, "ore" stays visible
    assert_eq!(visible_width("ab\x1b[31 more"), 5);
}

// ============================================================================
// truncate
// ============================================================================

#[test]
fn truncate_zero_is_empty_even_for_styled_input() {
    assert_eq!(truncate("\x1b[31mred\x1b[0m", 0), "");
}

#[test]
fn truncate_always_ends_with_reset() {
    assert!(truncate("short", 10).ends_with(RESET));
    assert!(truncate("\x1b[31mlong red text", 4).ends_with(RESET));
}

#[test]
fn truncate_keeps_styling_around_kept_text() {
    assert_eq!(
        truncate("\x1b[31mHello\x1b[0m World", 5),
        "\x1b[31mHello\x1b[0m"
    );
}

#[test]
fn truncate_never_emits_half_a_sequence() {
    let out = truncate("abc\x1b[38;5;20", 10);
    assert_eq!(out, format!("abc{}", RESET));
    assert!(!scan(&out).any(|seg| matches!(seg, Segment::Unterminated(_))));
}

#[test]
fn truncate_stops_before_a_wide_character_that_does_not_fit() {
    assert_eq!(strip_control(&truncate("ab日", 3)), "ab");
}

// ============================================================================
// ellipsize
// ============================================================================

#[test]
fn ellipsize_marks_cut_text() {
    assert_eq!(strip_control(&ellipsize("dashboard", 6)), "dashb…");
    assert_eq!(visible_width(&ellipsize("dashboard", 6)), 6);
}

#[test]
fn ellipsize_leaves_fitting_text_alone() {
    assert_eq!(ellipsize("fits", 4), "fits");
}

#[test]
fn ellipsize_tiny_budget_has_no_marker() {
    assert_eq!(strip_control(&ellipsize("dashboard", 3)), "das");
}

// ============================================================================
// pad
// ============================================================================

#[test]
fn pad_alignments() {
    assert_eq!(pad("ok", 6, Align::Left), "ok    ");
    assert_eq!(pad("ok", 6, Align::Right), "    ok");
    assert_eq!(pad("ok", 5, Align::Center), " ok  ");
}

#[test]
fn pad_styled_text_hits_exact_width() {
    let out = pad("\x1b[32mup\x1b[0m", 7, Align::Center);
    assert_eq!(visible_width(&out), 7);
    assert_eq!(strip_control(&out), "  up   ");
}

#[test]
fn pad_cuts_overlong_text() {
    let out = pad("overflowing", 4, Align::Left);
    assert_eq!(strip_control(&out), "over");
    assert!(out.ends_with(RESET));
}

// ============================================================================
// strip_control / trim_unterminated
// ============================================================================

#[test]
fn strip_control_leaves_only_visible_text() {
    assert_eq!(strip_control("\x1b[1mA\x1b[0m\x1b[2Kb\x1b[5"), "Ab");
}

#[test]
fn trim_unterminated_keeps_complete_sequences() {
    assert_eq!(trim_unterminated("\x1b[1mA\x1b[0"), "\x1b[1mA");
}
