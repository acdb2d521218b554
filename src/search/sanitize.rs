//! Query text sanitization before dispatch.

/// Strip backslash escaping artifacts and drop control characters.
///
/// Request plumbing upstream may deliver the query with quotes
/// backslash-escaped; the backend must see the bare text. A backslash always
/// consumes the character after it (`\'` → `'`, `\\` → `\`); control
/// characters are removed outright.
pub fn sanitize(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut chars = query.chars();
    while let Some(c) = chars.next() {
        let c = if c == '\\' {
            match chars.next() {
                Some(escaped) => escaped,
                None => break,
            }
        } else {
            c
        };
        if c.is_control() {
            continue;
        }
        out.push(c);
    }
    out
}
