/// All localized requirement-message templates for one language.
///
/// Numeric and string arguments are substituted for the `{value}` placeholder.
/// An empty template means the message is not translated for this language;
/// lookups then fall back to the canonical locale's table.
#[derive(Debug, Clone)]
pub struct MessageStrings {
    // ==================== Case Sensitivity ====================
    pub case_sensitive: &'static str,
    pub not_case_sensitive: &'static str,

    // ==================== Length ====================
    pub min_length: &'static str,
    pub min_length_plural: &'static str,
    pub max_length: &'static str,
    pub max_length_plural: &'static str,

    // ==================== Letters ====================
    pub min_alpha: &'static str,
    pub min_alpha_plural: &'static str,
    pub max_alpha: &'static str,
    pub max_alpha_plural: &'static str,

    // ==================== Numbers ====================
    pub numeric_not_allowed: &'static str,
    pub min_numeric: &'static str,
    pub min_numeric_plural: &'static str,
    pub max_numeric: &'static str,
    pub max_numeric_plural: &'static str,
    pub first_char_numeric: &'static str,
    pub last_char_numeric: &'static str,

    // ==================== Symbols ====================
    pub special_not_allowed: &'static str,
    pub min_special: &'static str,
    pub min_special_plural: &'static str,
    pub max_special: &'static str,
    pub max_special_plural: &'static str,
    pub first_char_special: &'static str,
    pub last_char_special: &'static str,

    // ==================== Repetition ====================
    pub max_repeat: &'static str,
    pub max_repeat_plural: &'static str,
    pub max_sequential_repeat: &'static str,
    pub max_sequential_repeat_plural: &'static str,

    // ==================== Character Classes ====================
    pub min_lower_case: &'static str,
    pub min_lower_case_plural: &'static str,
    pub max_lower_case: &'static str,
    pub max_lower_case_plural: &'static str,
    pub min_upper_case: &'static str,
    pub min_upper_case_plural: &'static str,
    pub max_upper_case: &'static str,
    pub max_upper_case_plural: &'static str,
    pub min_unique: &'static str,
    pub min_unique_plural: &'static str,

    // ==================== Content Restrictions ====================
    pub disallowed_values: &'static str,
    pub disallowed_attributes: &'static str,
    pub wordlist_check: &'static str,

    // ==================== History & Lifetime ====================
    pub max_old_chars: &'static str,
    pub minimum_frequency: &'static str,
    pub unique_required: &'static str,

    // ==================== Vendor Complexity ====================
    pub legacy_complexity: &'static str,
    pub modern_complexity: &'static str,

    // ==================== Duration Units ====================
    pub day_singular: &'static str,
    pub day_plural: &'static str,
    pub hour_singular: &'static str,
    pub hour_plural: &'static str,
}

// ==================== English Messages ====================

/// English requirement messages (canonical).
pub const ENGLISH_MESSAGES: MessageStrings = MessageStrings {
    // Case sensitivity
    case_sensitive: "Password is case sensitive.",
    not_case_sensitive: "Password is not case sensitive.",

    // Length
    min_length: "Must be at least {value} character long.",
    min_length_plural: "Must be at least {value} characters long.",
    max_length: "Must be no more than {value} character long.",
    max_length_plural: "Must be no more than {value} characters long.",

    // Letters
    min_alpha: "Must include at least {value} letter.",
    min_alpha_plural: "Must include at least {value} letters.",
    max_alpha: "Must not include more than {value} letter.",
    max_alpha_plural: "Must not include more than {value} letters.",

    // Numbers
    numeric_not_allowed: "Must not include any numbers.",
    min_numeric: "Must include at least {value} number.",
    min_numeric_plural: "Must include at least {value} numbers.",
    max_numeric: "Must not include more than {value} number.",
    max_numeric_plural: "Must not include more than {value} numbers.",
    first_char_numeric: "The first character must not be a number.",
    last_char_numeric: "The last character must not be a number.",

    // Symbols
    special_not_allowed: "Must not include any symbol (non letter or number) characters.",
    min_special: "Must include at least {value} symbol (non letter or number) character.",
    min_special_plural: "Must include at least {value} symbol (non letter or number) characters.",
    max_special: "Must not include more than {value} symbol (non letter or number) character.",
    max_special_plural: "Must not include more than {value} symbol (non letter or number) characters.",
    first_char_special: "The first character must not be a symbol (non letter or number) character.",
    last_char_special: "The last character must not be a symbol (non letter or number) character.",

    // Repetition
    max_repeat: "Must not repeat any character more than {value} time.",
    max_repeat_plural: "Must not repeat any character more than {value} times.",
    max_sequential_repeat: "Must not repeat any character in sequence more than {value} time.",
    max_sequential_repeat_plural: "Must not repeat any character in sequence more than {value} times.",

    // Character classes
    min_lower_case: "Must include at least {value} lowercase letter.",
    min_lower_case_plural: "Must include at least {value} lowercase letters.",
    max_lower_case: "Must not include more than {value} lowercase letter.",
    max_lower_case_plural: "Must not include more than {value} lowercase letters.",
    min_upper_case: "Must include at least {value} uppercase letter.",
    min_upper_case_plural: "Must include at least {value} uppercase letters.",
    max_upper_case: "Must not include more than {value} uppercase letter.",
    max_upper_case_plural: "Must not include more than {value} uppercase letters.",
    min_unique: "Must include at least {value} unique character.",
    min_unique_plural: "Must include at least {value} unique characters.",

    // Content restrictions
    disallowed_values: "Must not include the following values:{value}",
    disallowed_attributes: "Must not include part of your name or user name.",
    wordlist_check: "Must not be a common word or commonly used sequence of characters.",

    // History & lifetime
    max_old_chars: "Must not include more than {value} characters from your previous password.",
    minimum_frequency: "Password may not be changed more often than once every {value}.",
    unique_required: "Must not be a previously used password.",

    // Vendor complexity
    legacy_complexity: "Must not include part of your user name and must include characters from \
                        three of the following categories: uppercase letters, lowercase letters, \
                        numbers, and symbols.",
    modern_complexity: "Must not include part of your user name and may violate at most {value} of \
                        the following categories: uppercase letters, lowercase letters, numbers, \
                        and symbols.",

    // Duration units
    day_singular: "day",
    day_plural: "days",
    hour_singular: "hour",
    hour_plural: "hours",
};

// ==================== Spanish Messages ====================

/// Spanish requirement messages.
pub const SPANISH_MESSAGES: MessageStrings = MessageStrings {
    // Case sensitivity
    case_sensitive: "La contraseña distingue entre mayúsculas y minúsculas.",
    not_case_sensitive: "La contraseña no distingue entre mayúsculas y minúsculas.",

    // Length
    min_length: "Debe tener al menos {value} carácter.",
    min_length_plural: "Debe tener al menos {value} caracteres.",
    max_length: "No debe tener más de {value} carácter.",
    max_length_plural: "No debe tener más de {value} caracteres.",

    // Letters
    min_alpha: "Debe incluir al menos {value} letra.",
    min_alpha_plural: "Debe incluir al menos {value} letras.",
    max_alpha: "No debe incluir más de {value} letra.",
    max_alpha_plural: "No debe incluir más de {value} letras.",

    // Numbers
    numeric_not_allowed: "No debe incluir números.",
    min_numeric: "Debe incluir al menos {value} número.",
    min_numeric_plural: "Debe incluir al menos {value} números.",
    max_numeric: "No debe incluir más de {value} número.",
    max_numeric_plural: "No debe incluir más de {value} números.",
    first_char_numeric: "El primer carácter no debe ser un número.",
    last_char_numeric: "El último carácter no debe ser un número.",

    // Symbols
    special_not_allowed: "No debe incluir símbolos (caracteres que no sean letras ni números).",
    min_special: "Debe incluir al menos {value} símbolo (carácter que no sea letra ni número).",
    min_special_plural: "Debe incluir al menos {value} símbolos (caracteres que no sean letras ni números).",
    max_special: "No debe incluir más de {value} símbolo (carácter que no sea letra ni número).",
    max_special_plural: "No debe incluir más de {value} símbolos (caracteres que no sean letras ni números).",
    first_char_special: "El primer carácter no debe ser un símbolo.",
    last_char_special: "El último carácter no debe ser un símbolo.",

    // Repetition
    max_repeat: "No debe repetir ningún carácter más de {value} vez.",
    max_repeat_plural: "No debe repetir ningún carácter más de {value} veces.",
    max_sequential_repeat: "No debe repetir ningún carácter en secuencia más de {value} vez.",
    max_sequential_repeat_plural: "No debe repetir ningún carácter en secuencia más de {value} veces.",

    // Character classes
    min_lower_case: "Debe incluir al menos {value} letra minúscula.",
    min_lower_case_plural: "Debe incluir al menos {value} letras minúsculas.",
    max_lower_case: "No debe incluir más de {value} letra minúscula.",
    max_lower_case_plural: "No debe incluir más de {value} letras minúsculas.",
    min_upper_case: "Debe incluir al menos {value} letra mayúscula.",
    min_upper_case_plural: "Debe incluir al menos {value} letras mayúsculas.",
    max_upper_case: "No debe incluir más de {value} letra mayúscula.",
    max_upper_case_plural: "No debe incluir más de {value} letras mayúsculas.",
    min_unique: "Debe incluir al menos {value} carácter único.",
    min_unique_plural: "Debe incluir al menos {value} caracteres únicos.",

    // Content restrictions
    disallowed_values: "No debe incluir los siguientes valores:{value}",
    disallowed_attributes: "No debe incluir parte de su nombre o nombre de usuario.",
    wordlist_check: "No debe ser una palabra común ni una secuencia de caracteres de uso habitual.",

    // History & lifetime
    max_old_chars: "No debe incluir más de {value} caracteres de su contraseña anterior.",
    minimum_frequency: "La contraseña no puede cambiarse más de una vez cada {value}.",
    unique_required: "No debe ser una contraseña utilizada anteriormente.",

    // Vendor complexity
    legacy_complexity: "No debe incluir parte de su nombre de usuario y debe incluir caracteres de \
                        tres de las siguientes categorías: letras mayúsculas, letras minúsculas, \
                        números y símbolos.",
    modern_complexity: "No debe incluir parte de su nombre de usuario y puede incumplir como máximo \
                        {value} de las siguientes categorías: letras mayúsculas, letras minúsculas, \
                        números y símbolos.",

    // Duration units
    day_singular: "día",
    day_plural: "días",
    hour_singular: "hora",
    hour_plural: "horas",
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== English Message Tests ====================

    #[test]
    fn test_english_numeric_templates_have_placeholder() {
        assert!(ENGLISH_MESSAGES.min_length.contains("{value}"));
        assert!(ENGLISH_MESSAGES.min_length_plural.contains("{value}"));
        assert!(ENGLISH_MESSAGES.max_old_chars.contains("{value}"));
        assert!(ENGLISH_MESSAGES.modern_complexity.contains("{value}"));
    }

    #[test]
    fn test_english_fixed_templates_have_no_placeholder() {
        assert!(!ENGLISH_MESSAGES.case_sensitive.contains("{value}"));
        assert!(!ENGLISH_MESSAGES.wordlist_check.contains("{value}"));
        assert!(!ENGLISH_MESSAGES.unique_required.contains("{value}"));
    }

    #[test]
    fn test_english_duration_units() {
        assert_eq!(ENGLISH_MESSAGES.day_singular, "day");
        assert_eq!(ENGLISH_MESSAGES.day_plural, "days");
        assert_eq!(ENGLISH_MESSAGES.hour_singular, "hour");
        assert_eq!(ENGLISH_MESSAGES.hour_plural, "hours");
    }

    // ==================== Spanish Message Tests ====================

    #[test]
    fn test_spanish_numeric_templates_have_placeholder() {
        assert!(SPANISH_MESSAGES.min_length.contains("{value}"));
        assert!(SPANISH_MESSAGES.min_unique_plural.contains("{value}"));
        assert!(SPANISH_MESSAGES.minimum_frequency.contains("{value}"));
    }

    #[test]
    fn test_spanish_is_fully_translated() {
        // No field is allowed to be empty while Spanish is an enabled locale.
        assert!(!SPANISH_MESSAGES.case_sensitive.is_empty());
        assert!(!SPANISH_MESSAGES.disallowed_values.is_empty());
        assert!(!SPANISH_MESSAGES.legacy_complexity.is_empty());
        assert!(!SPANISH_MESSAGES.hour_plural.is_empty());
    }

    #[test]
    fn test_disallowed_values_placeholder_abuts_colon() {
        // The detail string already starts with a space per value.
        assert!(ENGLISH_MESSAGES.disallowed_values.ends_with(":{value}"));
        assert!(SPANISH_MESSAGES.disallowed_values.ends_with(":{value}"));
    }
}
