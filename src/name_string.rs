mod tests;

/// Maximum size (number of bytes) allowed for the NetCDF names.
pub const NC_MAX_NAME_SIZE: usize = 256;

/// Checks that `name` follows the NetCDF-3 naming convention.
///
/// # Examples
///
/// ```
/// use nc3::is_valid_name;
///
/// assert_eq!(true,    is_valid_name("temperature"));
/// assert_eq!(true,    is_valid_name("standard_name"));
/// assert_eq!(true,    is_valid_name("_FillValue"));
/// assert_eq!(true,    is_valid_name("café"));  // UTF-8 encoded characters are supported
/// assert_eq!(true,    is_valid_name("A"));
///
/// assert_eq!(false,   is_valid_name(""));
/// assert_eq!(false,   is_valid_name("!invalid_name"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let first_char: char = match name.chars().next() {
        None => return false, // the name is empty
        Some(c) => c,
    };
    if first_char.is_ascii() && !(first_char.is_alphanumeric() || first_char == '_') {
        return false;
    }
    if name.len() > NC_MAX_NAME_SIZE {
        return false;
    }
    name.chars()
        .skip(1)
        .all(|c: char| c.is_alphanumeric() || !c.is_ascii() || is_special_1(c) || is_special_2(c))
}

/// Returns `true` if the `char` belongs to the NetCDF-3 *special1* character class.
///
/// ``` text
/// special1     = '_''.''@''+''-'
/// ```
fn is_special_1(chr: char) -> bool {
    matches!(chr, '_' | '.' | '@' | '+' | '-')
}

/// Returns `true` if the `char` belongs to the NetCDF-3 *special2* character class.
///
/// ``` text
/// special2     = ' ' | '!' | '"' | '#' | '$' | '%' | '&' | '\'' |
/// '(' | ')' | '*' | ','  | ':' | ';' | '<' | '='  |
/// '>' | '?' | '[' | '\\' | ']' | '^' | '`' | '{'  |
/// '|' | '}' | '~'
/// ```
fn is_special_2(chr: char) -> bool {
    matches!(
        chr,
        ' ' | '!'
            | '"'
            | '#'
            | '$'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | ','
            | ':'
            | ';'
            | '<'
            | '='
            | '>'
            | '?'
            | '['
            | '\\'
            | ']'
            | '^'
            | '`'
            | '{'
            | '|'
            | '}'
            | '~'
    )
}
