/// Decide whether a diagnosis guess counts as correct.
///
/// Both sides are lowercased and trimmed; the guess is accepted when either
/// string contains the other. This accepts partial guesses ("pneumonia"
/// for "Community-Acquired Pneumonia") as well as overly broad ones, and an
/// empty side matches everything. Callers that must not accept empty input
/// filter it before calling.
pub fn is_match(guess: &str, known_diagnosis: &str) -> bool {
    let guess = guess.trim().to_lowercase();
    let known = known_diagnosis.trim().to_lowercase();

    known.contains(&guess) || guess.contains(&known)
}
