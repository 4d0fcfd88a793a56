//! Save-name handling for downloaded payloads.

pub const DEFAULT_FILENAME: &str = "video.mp4";

/// First `filename=` parameter of a Content-Disposition value.
///
/// Quoted values run to the closing unescaped quote, so a `;` inside a title
/// survives. `filename*=` (RFC 5987) is skipped; the backend always sends the
/// plain `filename` first.
pub fn filename_from_disposition(header_value: &str) -> Option<String> {
    let mut rest = header_value;
    loop {
        let at = rest.find(['=', ';'])?;
        let name = rest[..at].trim();
        if rest[at..].starts_with(';') {
            // Valueless parameter such as the leading `attachment`.
            rest = &rest[at + 1..];
            continue;
        }

        let (value, tail) = split_value(rest[at + 1..].trim_start());
        if name.eq_ignore_ascii_case("filename") && !value.is_empty() {
            return Some(value);
        }
        rest = tail;
    }
}

/// Splits one parameter value off the front of `s`, returning the value and
/// whatever follows its terminating `;`.
fn split_value(s: &str) -> (String, &str) {
    let Some(quoted) = s.strip_prefix('"') else {
        return match s.split_once(';') {
            Some((token, tail)) => (token.trim().to_string(), tail),
            None => (s.trim().to_string(), ""),
        };
    };

    let mut escaped = false;
    for (i, c) in quoted.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => {
                let tail = quoted[i + 1..].split_once(';').map_or("", |(_, tail)| tail);
                return (decode_quoted(&quoted[..i]), tail);
            }
            _ => escaped = false,
        }
    }
    // Unterminated quote: take everything.
    (decode_quoted(quoted), "")
}

// Undo quoted-pair escaping of `\"` and `\\`.
fn decode_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek().filter(|n| **n == '"' || **n == '\\') {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Resolves the save name from an optional header, falling back to `video.mp4`.
pub fn save_name(header_value: Option<&str>) -> String {
    header_value
        .and_then(filename_from_disposition)
        .map(|name| sanitize(&name))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}

// Keep only the final path component so a header can't point outside the download dir.
fn sanitize(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = base.chars().filter(|c| !c.is_control()).collect();
    let cleaned = cleaned.trim();
    if cleaned == "." || cleaned == ".." {
        return String::new();
    }
    cleaned.to_string()
}
