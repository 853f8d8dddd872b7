//! English inflection tables and rules used for pluralizing identifiers.
//!
//! Only the *last word* of a studly identifier is inflected, so
//! `InvoiceItem` becomes `InvoiceItems` and `SalesPerson` becomes
//! `SalesPeople`. Words that already look plural are left alone.
//!
//! # Rule order
//!
//! 1. Uncountable words never change (`Equipment`, `Series`)
//! 2. Irregular singulars map through the table (`Person` → `People`)
//! 3. Irregular plurals are already plural (`People` stays)
//! 4. Singulars ending in a lone `s` take `es` (`Alias` → `Aliases`)
//! 5. A trailing `s` that is not `ss`, `us` or `is` is already plural
//! 6. Suffix rules: `sis` → `ses`, sibilants take `es`, consonant + `y` → `ies`
//! 7. Everything else takes `s`

/// Words with no distinct plural form.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "cattle",
    "data",
    "deer",
    "education",
    "equipment",
    "evidence",
    "feedback",
    "firmware",
    "fish",
    "furniture",
    "hardware",
    "information",
    "knowledge",
    "metadata",
    "money",
    "moose",
    "news",
    "offspring",
    "police",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "traffic",
];

/// Singular words whose trailing `s` would otherwise read as a plural.
const SINGULAR_S: &[&str] = &[
    "alias", "atlas", "bias", "bus", "canvas", "chaos", "gas", "iris", "lens", "pancreas",
];

/// Irregular singular → plural pairs, lowercase.
const IRREGULAR: &[(&str, &str)] = &[
    ("alumnus", "alumni"),
    ("axis", "axes"),
    ("cactus", "cacti"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("echo", "echoes"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("half", "halves"),
    ("hero", "heroes"),
    ("index", "indices"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("medium", "media"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("potato", "potatoes"),
    ("quiz", "quizzes"),
    ("shelf", "shelves"),
    ("syllabus", "syllabi"),
    ("tomato", "tomatoes"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

/// Pluralize the last word of an identifier, preserving the rest verbatim.
pub fn pluralize(identifier: &str) -> String {
    if identifier.is_empty() {
        return String::new();
    }

    let (head, word) = identifier.split_at(last_word_start(identifier));
    format!("{head}{}", pluralize_word(word))
}

/// Byte offset where the last word of a studly identifier begins.
///
/// A word starts at an uppercase letter preceded by a non-uppercase
/// character, or at the last uppercase letter of an acronym that is
/// followed by a lowercase letter (`HTTPRequest` → `Request`).
fn last_word_start(identifier: &str) -> usize {
    let chars: Vec<(usize, char)> = identifier.char_indices().collect();
    let mut start = 0;

    for (pos, &(offset, c)) in chars.iter().enumerate() {
        if pos == 0 || !c.is_uppercase() {
            continue;
        }
        let prev = chars[pos - 1].1;
        let next_is_lower = chars.get(pos + 1).is_some_and(|&(_, n)| n.is_lowercase());
        if !prev.is_uppercase() || next_is_lower {
            start = offset;
        }
    }

    start
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return match_case(word, plural);
    }

    if SINGULAR_S.contains(&lower.as_str()) {
        return match_case(word, &format!("{word}es"));
    }

    if IRREGULAR.iter().any(|(_, plural)| *plural == lower) || looks_plural(&lower) {
        return word.to_string();
    }

    let (keep, suffix) = if lower.ends_with("sis") {
        (word.len() - 2, "es")
    } else if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|ending| lower.ends_with(ending))
    {
        (word.len(), "es")
    } else if ends_with_consonant_y(&lower) {
        (word.len() - 1, "ies")
    } else {
        (word.len(), "s")
    };

    match_case(word, &format!("{}{suffix}", &word[..keep]))
}

fn looks_plural(lower: &str) -> bool {
    lower.len() > 2
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
}

fn ends_with_consonant_y(lower: &str) -> bool {
    let mut rev = lower.chars().rev();
    matches!(
        (rev.next(), rev.next()),
        (Some('y'), Some(prev)) if prev.is_alphabetic() && !"aeiou".contains(prev)
    )
}

fn is_shouting(word: &str) -> bool {
    word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase())
}

/// Re-case `replacement` to follow the casing style of `original`.
fn match_case(original: &str, replacement: &str) -> String {
    if is_shouting(original) {
        return replacement.to_uppercase();
    }

    let mut chars = replacement.chars();
    match (original.chars().next(), chars.next()) {
        (Some(first), Some(rep_first)) if first.is_uppercase() => {
            rep_first.to_uppercase().chain(chars).collect()
        }
        _ => replacement.to_string(),
    }
}
