use casegpt_export::sanitize::{first_unencodable, sanitize};

#[test]
fn emoji_removed_surrounding_text_intact() {
    assert_eq!(
        sanitize("Case: \u{1F469} patient presents..."),
        "Case:  patient presents..."
    );
}

#[test]
fn verdict_marks_are_removed() {
    assert_eq!(
        sanitize("Your diagnosis: gout\n\n\u{2705} Correct! Well done!"),
        "Your diagnosis: gout\n\n Correct! Well done!"
    );
}

#[test]
fn non_ascii_letters_and_controls_are_removed() {
    assert_eq!(sanitize("Ménière\t\r\u{7}ok"), "Mnireok");
}

#[test]
fn line_feeds_survive() {
    assert_eq!(sanitize("a\nb"), "a\nb");
    assert_eq!(first_unencodable("a\nb ~"), None);
}

#[test]
fn sanitized_text_is_always_encodable() {
    let messy = "°C 38.9 — HR 120 \u{1F912} µg/dL\u{0}\u{7f}";
    assert_eq!(first_unencodable(&sanitize(messy)), None);
    assert_eq!(first_unencodable(messy), Some('°'));
}
