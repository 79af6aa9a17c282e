//! Identifier normalization
//!
//! Field and method names in the API reference are snake_case
//! (`chat_id`, `ip_address`). Generated code wants PascalCase type and
//! field names with conventional acronym casing (`ChatID`, `IPAddress`).

/// Target case of the leading character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingCase {
    Lower,
    Upper,
}

/// Ordered literal replacements fixing acronym casing in generated text.
///
/// Rules run top to bottom, each over the output of the previous one. The
/// last two rules undo corrections that land inside an identifier whose
/// leading character was lowered afterwards: `URL` from the `Url` rules
/// becomes `uRL`, `IPAddress` becomes `iPAddress`. They must stay last.
pub const ACRONYM_RULES: &[(&str, &str)] = &[
    ("Id ", "ID "),
    ("Id\n", "ID\n"),
    (" id\n", " ID\n"),
    ("Id)", "ID)"),
    ("Ids", "IDs"),
    ("Id,", "ID,"),
    ("Id{", "ID{"),
    (" id ", " ID "),
    ("Url ", "URL "),
    (" url ", " URL "),
    (" url's ", " URL's "),
    ("url\n", "URL\n"),
    ("IpAddress", "IPAddress"),
    ("Botfather", "BotFather"),
    ("@channelusername", "@channel_username"),
    ("@supergroupusername", "@supergroup_username"),
    // undo rules
    ("uRL", "url"),
    ("iPAddress", "ipAddress"),
];

/// Convert `snake_case` to `PascalCase`
///
/// Underscores are dropped and the character after each one is
/// uppercased, as is the first character.
///
/// ```rust
/// use apidoc_normalizer::ident::snake_to_pascal;
///
/// assert_eq!(snake_to_pascal("chat_id"), "ChatId");
/// ```
pub fn snake_to_pascal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut upper_next = true;

    for ch in text.chars() {
        if ch == '_' {
            upper_next = true;
            continue;
        }

        if upper_next {
            upper_next = false;
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
    }

    result
}

/// Change the case of the first character only
pub fn flip_leading_case(text: &str, case: LeadingCase) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(text.len());
    match case {
        LeadingCase::Lower => result.extend(first.to_lowercase()),
        LeadingCase::Upper => result.extend(first.to_uppercase()),
    }
    result.push_str(chars.as_str());
    result
}

/// Identifier suffix corrected only at the very end of the input
///
/// `ChatId` on its own has no following delimiter for the `Id ` or `Id\n`
/// rules to match, so a trailing `Id` is rewritten to `ID` before
/// [`ACRONYM_RULES`] run. No other rule is anchored to the end.
pub const TRAILING_ID: (&str, &str) = ("Id", "ID");

/// Apply [`TRAILING_ID`], then [`ACRONYM_RULES`] in order
///
/// # Arguments
///
/// * `text` - Identifier or rendered source text
///
/// # Returns
///
/// The text with every rule applied as a literal substring replacement.
///
/// # Examples
///
/// ```rust
/// use apidoc_normalizer::ident::correct_acronyms;
///
/// assert_eq!(correct_acronyms("ChatId"), "ChatID");
/// assert_eq!(correct_acronyms("PhotoUrl string"), "PhotoURL string");
/// assert_eq!(correct_acronyms("curl"), "curl");
/// ```
pub fn correct_acronyms(text: &str) -> String {
    let (suffix, replacement) = TRAILING_ID;
    let mut text = match text.strip_suffix(suffix) {
        Some(stem) => format!("{}{}", stem, replacement),
        None => text.to_string(),
    };

    for &(pattern, replacement) in ACRONYM_RULES {
        if text.contains(pattern) {
            text = text.replace(pattern, replacement);
        }
    }
    text
}

/// Generated type or method name: `chat_id` becomes `ChatID`
pub fn type_name(raw: &str) -> String {
    correct_acronyms(&snake_to_pascal(raw))
}

/// Generated field name: `ip_address` becomes `ipAddress`
pub fn field_name(raw: &str) -> String {
    correct_acronyms(&flip_leading_case(&type_name(raw), LeadingCase::Lower))
}
