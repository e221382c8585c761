/* Escape text for inclusion in a C string literal. Backslash, double quote
 * and newline are the only characters that can break the emitted literal;
 * everything else passes through unchanged so clean schemas emit
 * byte-identical to their text. */
pub fn c_string_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/* Derive the include-guard identifier from a header file name: uppercase,
 * every character outside [_A-Z] replaced by an underscore, wrapped in
 * double underscores. "hub_commands.h" becomes "__HUB_COMMANDS_H__". */
pub fn header_guard(header_name: &str) -> String {
    let mangled: String = header_name
        .to_uppercase()
        .chars()
        .map(|c| if c.is_ascii_uppercase() || c == '_' { c } else { '_' })
        .collect();
    format!("__{mangled}__")
}
