//! Struct tag parsing
//!
//! Parses tag strings written in the conventional `key:"value"` form, for
//! example `json:"color" protobuf:"varint,1,opt,enum=pkg.Color"`.
//! Parsing is lenient: it stops silently at the first malformed pair and
//! returns the pairs read so far.

/// Parse a raw struct tag into `(key, value)` pairs in declaration order
///
/// Duplicate keys are all returned; callers decide which occurrence wins.
///
/// # Example
///
/// ```rust
/// use property_metadata_sdk::models::tag::parse_struct_tag;
///
/// let pairs = parse_struct_tag(r#"json:"id" description:"Unique \"id\"""#);
/// assert_eq!(pairs[0], ("json".to_string(), "id".to_string()));
/// assert_eq!(pairs[1].1, "Unique \"id\"");
/// ```
pub fn parse_struct_tag(raw: &str) -> Vec<(String, String)> {
    scan_struct_tag(raw).0
}

/// Parse a raw struct tag, failing on malformed text
///
/// Returns the unparsed remainder, starting at the first malformed pair, as
/// the error.
///
/// # Example
///
/// ```rust
/// use property_metadata_sdk::models::tag::try_parse_struct_tag;
///
/// assert_eq!(try_parse_struct_tag(r#"json:"id" broken"#), Err("broken"));
/// assert!(try_parse_struct_tag(r#"json:"id""#).is_ok());
/// ```
pub fn try_parse_struct_tag(raw: &str) -> Result<Vec<(String, String)>, &str> {
    match scan_struct_tag(raw) {
        (pairs, "") => Ok(pairs),
        (_, remainder) => Err(remainder),
    }
}

/// Scan pairs until the end of the tag or the first malformed pair
fn scan_struct_tag(raw: &str) -> (Vec<(String, String)>, &str) {
    let mut pairs = Vec::new();
    let mut rest = raw;

    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            return (pairs, rest);
        }
        let pair_start = rest;

        let bytes = rest.as_bytes();
        let mut i = 0;
        while i < bytes.len()
            && bytes[i] > b' '
            && bytes[i] != b':'
            && bytes[i] != b'"'
            && bytes[i] != 0x7f
        {
            i += 1;
        }
        if i == 0 || i + 1 >= bytes.len() || bytes[i] != b':' || bytes[i + 1] != b'"' {
            return (pairs, pair_start);
        }
        let key = &rest[..i];
        rest = &rest[i + 1..];

        // Scan to the closing quote, stepping over escaped characters
        let bytes = rest.as_bytes();
        let mut i = 1;
        while i < bytes.len() && bytes[i] != b'"' {
            if bytes[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }
        if i >= bytes.len() {
            return (pairs, pair_start);
        }
        let quoted = &rest[1..i];
        rest = &rest[i + 1..];

        match unquote(quoted) {
            Some(value) => pairs.push((key.to_string(), value)),
            None => return (pairs, pair_start),
        }
    }
}

/// Resolve escape sequences of a double-quoted string body
///
/// Returns `None` for invalid escapes or raw line breaks.
fn unquote(body: &str) -> Option<String> {
    if !body.contains('\\') {
        return (!body.contains('\n')).then(|| body.to_string());
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\n' => return None,
            '\\' => {
                let escaped = match chars.next()? {
                    'a' => '\u{07}',
                    'b' => '\u{08}',
                    'f' => '\u{0c}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'v' => '\u{0b}',
                    '\\' => '\\',
                    '"' => '"',
                    'x' => hex_escape(&mut chars, 2).filter(char::is_ascii)?,
                    'u' => hex_escape(&mut chars, 4)?,
                    'U' => hex_escape(&mut chars, 8)?,
                    _ => return None,
                };
                out.push(escaped);
            }
            other => out.push(other),
        }
    }
    Some(out)
}

fn hex_escape(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let mut code = 0u32;
    for _ in 0..digits {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(code)
}
