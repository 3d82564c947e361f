use std::collections::HashMap;
use std::sync::LazyLock;

/// One entry of the text plate character set.
///
/// `ch` is the canonical display character; `alternates` are visually
/// equivalent characters resolved to the same tile (e.g. typographic quotes).
/// `variant` is the 1-indexed tile variation of the textplate entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateChar {
    pub name: &'static str,
    pub ch: char,
    pub alternates: &'static [char],
    pub variant: u16,
}

/// Variant used for every character the plate set cannot display.
pub const FALLBACK_VARIANT: u16 = 1;

/// Full character set of the Text Plates mod.
///
/// Order matters: `variant` follows the tile order of the plate sprite
/// sheet, with the cog (the blank/unsupported tile) first. No character may
/// be claimed by more than one entry, canonical or alternate; the table
/// consistency test enforces this.
pub static PLATE_CHARS: &[PlateChar] = &[
    PlateChar { name: "Cog", ch: '⚙', alternates: &[], variant: 1 },
    PlateChar { name: "0", ch: '0', alternates: &[], variant: 2 },
    PlateChar { name: "1", ch: '1', alternates: &[], variant: 3 },
    PlateChar { name: "2", ch: '2', alternates: &[], variant: 4 },
    PlateChar { name: "3", ch: '3', alternates: &[], variant: 5 },
    PlateChar { name: "4", ch: '4', alternates: &[], variant: 6 },
    PlateChar { name: "5", ch: '5', alternates: &[], variant: 7 },
    PlateChar { name: "6", ch: '6', alternates: &[], variant: 8 },
    PlateChar { name: "7", ch: '7', alternates: &[], variant: 9 },
    PlateChar { name: "8", ch: '8', alternates: &[], variant: 10 },
    PlateChar { name: "9", ch: '9', alternates: &[], variant: 11 },
    PlateChar { name: "A", ch: 'A', alternates: &['a'], variant: 12 },
    PlateChar { name: "B", ch: 'B', alternates: &['b'], variant: 13 },
    PlateChar { name: "C", ch: 'C', alternates: &['c'], variant: 14 },
    PlateChar { name: "D", ch: 'D', alternates: &['d'], variant: 15 },
    PlateChar { name: "E", ch: 'E', alternates: &['e'], variant: 16 },
    PlateChar { name: "F", ch: 'F', alternates: &['f'], variant: 17 },
    PlateChar { name: "G", ch: 'G', alternates: &['g'], variant: 18 },
    PlateChar { name: "H", ch: 'H', alternates: &['h'], variant: 19 },
    PlateChar { name: "I", ch: 'I', alternates: &['i'], variant: 20 },
    PlateChar { name: "J", ch: 'J', alternates: &['j'], variant: 21 },
    PlateChar { name: "K", ch: 'K', alternates: &['k'], variant: 22 },
    PlateChar { name: "L", ch: 'L', alternates: &['l'], variant: 23 },
    PlateChar { name: "M", ch: 'M', alternates: &['m'], variant: 24 },
    PlateChar { name: "N", ch: 'N', alternates: &['n'], variant: 25 },
    PlateChar { name: "O", ch: 'O', alternates: &['o'], variant: 26 },
    PlateChar { name: "P", ch: 'P', alternates: &['p'], variant: 27 },
    PlateChar { name: "Q", ch: 'Q', alternates: &['q'], variant: 28 },
    PlateChar { name: "R", ch: 'R', alternates: &['r'], variant: 29 },
    PlateChar { name: "S", ch: 'S', alternates: &['s'], variant: 30 },
    PlateChar { name: "T", ch: 'T', alternates: &['t'], variant: 31 },
    PlateChar { name: "U", ch: 'U', alternates: &['u'], variant: 32 },
    PlateChar { name: "V", ch: 'V', alternates: &['v'], variant: 33 },
    PlateChar { name: "W", ch: 'W', alternates: &['w'], variant: 34 },
    PlateChar { name: "X", ch: 'X', alternates: &['x'], variant: 35 },
    PlateChar { name: "Y", ch: 'Y', alternates: &['y'], variant: 36 },
    PlateChar { name: "Z", ch: 'Z', alternates: &['z'], variant: 37 },
    PlateChar { name: "Period", ch: '.', alternates: &['·', '•'], variant: 38 },
    PlateChar { name: "Comma", ch: ',', alternates: &['、'], variant: 39 },
    PlateChar { name: "Exclamation", ch: '!', alternates: &['¡'], variant: 40 },
    PlateChar { name: "Question", ch: '?', alternates: &['¿'], variant: 41 },
    PlateChar { name: "Colon", ch: ':', alternates: &[], variant: 42 },
    PlateChar { name: "Semicolon", ch: ';', alternates: &[], variant: 43 },
    PlateChar { name: "Apostrophe", ch: '\'', alternates: &['‘', '’', '`'], variant: 44 },
    PlateChar { name: "Quote", ch: '"', alternates: &['“', '”'], variant: 45 },
    PlateChar { name: "Dash", ch: '-', alternates: &['–', '—', '−'], variant: 46 },
    PlateChar { name: "Plus", ch: '+', alternates: &[], variant: 47 },
    PlateChar { name: "Equals", ch: '=', alternates: &[], variant: 48 },
    PlateChar { name: "Slash", ch: '/', alternates: &['⁄'], variant: 49 },
    PlateChar { name: "Backslash", ch: '\\', alternates: &[], variant: 50 },
    PlateChar { name: "Asterisk", ch: '*', alternates: &['×'], variant: 51 },
    PlateChar { name: "ParenOpen", ch: '(', alternates: &['[', '{'], variant: 52 },
    PlateChar { name: "ParenClose", ch: ')', alternates: &[']', '}'], variant: 53 },
    PlateChar { name: "LessThan", ch: '<', alternates: &['‹'], variant: 54 },
    PlateChar { name: "GreaterThan", ch: '>', alternates: &['›'], variant: 55 },
    PlateChar { name: "At", ch: '@', alternates: &[], variant: 56 },
    PlateChar { name: "Hash", ch: '#', alternates: &[], variant: 57 },
    PlateChar { name: "Dollar", ch: '$', alternates: &[], variant: 58 },
    PlateChar { name: "Percent", ch: '%', alternates: &[], variant: 59 },
    PlateChar { name: "Ampersand", ch: '&', alternates: &[], variant: 60 },
    PlateChar { name: "Underscore", ch: '_', alternates: &[], variant: 61 },
    PlateChar { name: "ArrowLeft", ch: '←', alternates: &[], variant: 62 },
    PlateChar { name: "ArrowRight", ch: '→', alternates: &[], variant: 63 },
    PlateChar { name: "ArrowUp", ch: '↑', alternates: &[], variant: 64 },
    PlateChar { name: "ArrowDown", ch: '↓', alternates: &[], variant: 65 },
    PlateChar { name: "Heart", ch: '♥', alternates: &['❤'], variant: 66 },
    PlateChar { name: "Copyright", ch: '©', alternates: &[], variant: 67 },
    PlateChar { name: "Check", ch: '✓', alternates: &['✔'], variant: 68 },
];

/// char → variant index, built once on first use.
static INDEX: LazyLock<HashMap<char, u16>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for entry in PLATE_CHARS {
        map.insert(entry.ch, entry.variant);
        for &alt in entry.alternates {
            map.insert(alt, entry.variant);
        }
    }
    map
});

/// Resolves the 1-indexed plate variant for a character.
///
/// Total over all of Unicode: characters outside the plate set resolve to
/// the cog tile ([`FALLBACK_VARIANT`]) rather than failing.
pub fn resolve_variant(ch: char) -> u16 {
    INDEX.get(&ch).copied().unwrap_or(FALLBACK_VARIANT)
}

/// Whether a character has its own tile in the plate set.
/// Whitespace counts as supported since it maps to an empty cell.
pub fn is_supported(ch: char) -> bool {
    ch.is_whitespace() || INDEX.contains_key(&ch)
}

/// Collects the distinct characters of `text` that would fall back to the
/// cog tile, in first-occurrence order. Used for the CLI pre-flight warning.
pub fn unsupported_chars(text: &str) -> Vec<char> {
    let mut seen = Vec::new();
    for ch in text.chars() {
        if !is_supported(ch) && !seen.contains(&ch) {
            seen.push(ch);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn table_claims_each_char_once() {
        let mut claimed = HashSet::new();
        for entry in PLATE_CHARS {
            assert!(claimed.insert(entry.ch), "duplicate char {:?}", entry.ch);
            for &alt in entry.alternates {
                assert!(claimed.insert(alt), "duplicate alternate {:?}", alt);
            }
        }
    }

    #[test]
    fn variants_are_contiguous_from_one() {
        for (i, entry) in PLATE_CHARS.iter().enumerate() {
            assert_eq!(entry.variant as usize, i + 1);
        }
    }

    #[test]
    fn canonical_and_alternate_resolve_identically() {
        assert_eq!(resolve_variant('A'), resolve_variant('a'));
        assert_eq!(resolve_variant('-'), resolve_variant('—'));
        assert_eq!(resolve_variant('"'), resolve_variant('”'));
    }

    #[test]
    fn unknown_chars_fall_back_to_cog() {
        assert_eq!(resolve_variant('~'), FALLBACK_VARIANT);
        assert_eq!(resolve_variant('あ'), FALLBACK_VARIANT);
        assert_eq!(resolve_variant('\u{1F600}'), FALLBACK_VARIANT);
    }

    #[test]
    fn resolution_is_total() {
        for ch in ['\0', ' ', '\n', 'Q', '¬', '💡'] {
            let v = resolve_variant(ch);
            assert!(v >= 1 && v as usize <= PLATE_CHARS.len());
        }
    }

    #[test]
    fn unsupported_scan_dedups_and_ignores_whitespace() {
        assert_eq!(unsupported_chars("ab cd\n12"), Vec::<char>::new());
        assert_eq!(unsupported_chars("a~b~cØ"), vec!['~', 'Ø']);
    }
}
