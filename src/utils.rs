use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that always form `Common` runs, checked before any other rule.
/// `X`/`x` are here so masked identifiers like `**Xx-()` stay in one run.
pub const COMMON_CHARS: [char; 9] = ['*', 'X', 'x', '-', '(', ')', '_', '.', '@'];

/// Symbols that may not sit right outside a coalesced run when boundary
/// checking is on, in addition to letters and digits.
pub const BOUNDARY_SYMBOLS: [char; 6] = ['.', '*', '-', '_', '|', '%'];

pub fn is_common(ch: char) -> bool {
    COMMON_CHARS.contains(&ch)
}

/// True for codepoints of the Han script: CJK ideographs including every
/// extension block, compatibility ideographs, radicals, and the few Han
/// marks living in the CJK Symbols block (々 〇 and the Hangzhou numerals).
pub fn is_han(ch: char) -> bool {
    matches!(ch,
        '\u{2E80}'..='\u{2E99}'     // CJK Radicals Supplement
        | '\u{2E9B}'..='\u{2EF3}'
        | '\u{2F00}'..='\u{2FD5}'   // Kangxi Radicals
        | '\u{3005}'                // 々
        | '\u{3007}'                // 〇
        | '\u{3021}'..='\u{3029}'   // Hangzhou numerals
        | '\u{3038}'..='\u{303B}'
        | '\u{3400}'..='\u{4DBF}'   // CJK Extension A
        | '\u{4E00}'..='\u{9FFF}'   // CJK Unified Ideographs
        | '\u{F900}'..='\u{FA6D}'   // CJK Compatibility Ideographs
        | '\u{FA70}'..='\u{FAD9}'
        | '\u{16FE2}'..='\u{16FE3}'
        | '\u{16FF0}'..='\u{16FF1}'
        | '\u{20000}'..='\u{2A6DF}' // CJK Extension B
        | '\u{2A700}'..='\u{2B739}' // CJK Extension C
        | '\u{2B740}'..='\u{2B81D}' // CJK Extension D
        | '\u{2B820}'..='\u{2CEA1}' // CJK Extension E
        | '\u{2CEB0}'..='\u{2EBE0}' // CJK Extension F
        | '\u{2F800}'..='\u{2FA1D}' // CJK Compatibility Supplement
        | '\u{30000}'..='\u{3134A}' // CJK Extension G
        | '\u{31350}'..='\u{323AF}' // CJK Extension H
    )
}

// Unicode general categories L (letters) and Nd (decimal digits). Marks,
// letter-like numbers such as Ⅻ and other numerics such as ½ are in neither.
static LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}$").expect("Invalid letter regex"));
static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Nd}$").expect("Invalid decimal digit regex"));

fn matches_char(pattern: &Regex, ch: char) -> bool {
    let mut buf = [0u8; 4];
    pattern.is_match(ch.encode_utf8(&mut buf))
}

/// True for letters (general category L). Unlike `char::is_alphabetic` this
/// leaves out combining vowel signs and letter-like numbers.
pub fn is_letter(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic();
    }
    matches_char(&LETTER, ch)
}

/// True for decimal digits (general category Nd) of any script.
/// `char::is_numeric` is too wide here: it also accepts ½, ² and Ⅻ.
pub fn is_decimal_digit(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_digit();
    }
    matches_char(&DECIMAL_DIGIT, ch)
}

/// True if `ch` is a letter or digit but not a Han ideograph.
/// A run touching one of these on either side was most likely cut out of a
/// longer token, e.g. `2023` inside `A2023B`.
pub fn is_alpha_char(ch: char) -> bool {
    (is_letter(ch) || is_decimal_digit(ch)) && !is_han(ch)
}

/// True if `ch` may not directly precede or follow a boundary-checked run.
/// Han characters and ordinary punctuation are fine: `2023年` keeps `2023`.
pub fn is_boundary_illegal(ch: char) -> bool {
    is_alpha_char(ch) || BOUNDARY_SYMBOLS.contains(&ch)
}
