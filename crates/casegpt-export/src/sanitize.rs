/// Strip everything the built-in PDF fonts cannot draw.
///
/// Keeps printable 7-bit ASCII and line feeds. Emoji, accented letters,
/// tabs and other control characters are removed outright, not replaced.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|&c| c == '\n' || is_printable_ascii(c)).collect()
}

/// First character of `text` that cannot be written with a built-in font.
pub fn first_unencodable(text: &str) -> Option<char> {
    text.chars().find(|&c| c != '\n' && !is_printable_ascii(c))
}

fn is_printable_ascii(c: char) -> bool {
    matches!(c, ' '..='~')
}
