/// Normalizes a request or generated path into the canonical shape the
/// matching engine works with: exactly one leading `/`, no duplicate or
/// trailing slashes (the root stays `/`), and uppercase hex digits inside
/// percent-encoded triplets.
///
/// The function is total and idempotent; an empty input normalizes to `/`.
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn normalize_path(path: &str) -> String {
    let mut output = String::with_capacity(path.len() + 1);
    output.push('/');

    let mut prev_was_slash = true;
    let mut chars = path.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '/' {
            if !prev_was_slash {
                output.push('/');
                prev_was_slash = true;
            }
            continue;
        }

        prev_was_slash = false;

        if ch == '%' {
            // Uppercase an existing escape triplet; a bare '%' passes through.
            if let Some(hi) = chars.peek().copied().filter(|c| c.is_ascii_hexdigit()) {
                chars.next();
                if let Some(lo) = chars.peek().copied().filter(|c| c.is_ascii_hexdigit()) {
                    chars.next();
                    output.push('%');
                    output.push(hi.to_ascii_uppercase());
                    output.push(lo.to_ascii_uppercase());
                    continue;
                }
                output.push('%');
                output.push(hi);
                continue;
            }
            output.push('%');
            continue;
        }

        output.push(ch);
    }

    if output.len() > 1 && output.ends_with('/') {
        output.pop();
    }

    output
}
