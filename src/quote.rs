/// Escapes `text` so that, used as a pattern, it matches itself literally.
///
/// Metacharacters, space and `#` get a backslash; tab, form feed, vertical
/// tab, newline and carriage return become `\t`, `\f`, `\v`, `\n`, `\r`.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        match ch {
            '[' | ']' | '{' | '}' | '(' | ')' | '|' | '-' | '*' | '.' | '\\' | '?' | '+'
            | '^' | '$' | ' ' | '#' => {
                out.push('\\');
                out.push(ch);
            }
            '\t' => out.push_str("\\t"),
            '\x0C' => out.push_str("\\f"),
            '\x0B' => out.push_str("\\v"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}
