//! Caesar cipher encode/decode
//!
//! A substitution cipher over the 26 lowercase Latin letters: each letter is
//! replaced by the letter a fixed offset further along the alphabet, wrapping
//! at the boundary. Case is discarded (output is always lowercase) and
//! non-letters pass through unchanged. This has no cryptographic strength and
//! is not meant to.

/// Number of letters in the substitution alphabet
pub const ALPHABET_LEN: usize = 26;

/// The ordered lowercase Latin alphabet used as the substitution domain
///
/// Stateless; recomputed per call.
pub fn alphabet() -> [char; ALPHABET_LEN] {
    let mut letters = ['a'; ALPHABET_LEN];
    for (i, slot) in letters.iter_mut().enumerate() {
        *slot = (b'a' + i as u8) as char;
    }
    letters
}

/// Shift a single character within the lowercase alphabet.
///
/// ASCII letters of either case are lowercased and shifted; everything else
/// (digits, punctuation, whitespace, non-Latin letters) is returned as-is.
fn shift_char(ch: char, shift: i64) -> char {
    if ch.is_ascii_alphabetic() {
        let idx = (ch.to_ascii_lowercase() as u8 - b'a') as i64;
        // Normalize first: keeps the offset in 0..26 for any shift sign or
        // magnitude, so the addition below cannot overflow
        let shift = shift.rem_euclid(ALPHABET_LEN as i64);
        let shifted = ((idx + shift) % ALPHABET_LEN as i64) as u8;
        (b'a' + shifted) as char
    } else {
        ch
    }
}

/// Encode `text` with the given shift.
///
/// Returns the alphabet alongside the encoded text. The shift may be any
/// integer, negative or larger than 26; it is normalized modulo 26 before
/// indexing. Output letters are always lowercase.
///
/// # Examples
/// ```
/// use pocket_ledger::cipher::encode;
/// let (_, encoded) = encode("xyz", 3);
/// assert_eq!(encoded, "abc");
/// ```
pub fn encode(text: &str, shift: i64) -> ([char; ALPHABET_LEN], String) {
    let encoded = text.chars().map(|ch| shift_char(ch, shift)).collect();
    (alphabet(), encoded)
}

/// Decode `text` by applying the negated shift.
///
/// Exactly inverts [`encode`] for the same shift on lowercase-alphabetic
/// input. Case lost during encoding is not restored; decoded letters are
/// always lowercase.
pub fn decode(text: &str, shift: i64) -> String {
    // Normalize before negating so extreme shifts cannot overflow
    let shift = shift.rem_euclid(ALPHABET_LEN as i64);
    text.chars().map(|ch| shift_char(ch, -shift)).collect()
}
