#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits one CSV record on commas that are not inside a quoted section.
///
/// Fields are trimmed and their surrounding quotes removed. A doubled quote
/// inside a quoted section (`""`) is kept as a single literal quote.
pub fn split_csv_record(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match in_quotes {
            Some(q) if ch == q => {
                if chars.peek() == Some(&q) {
                    chars.next();
                    cur.push(q);
                    cur.push(q);
                } else {
                    in_quotes = None;
                    cur.push(ch);
                }
            }
            Some(_) => cur.push(ch),
            None => match ch {
                '"' | '\'' => {
                    in_quotes = Some(ch);
                    cur.push(ch);
                }
                ',' => {
                    out.push(unquote_field(&cur));
                    cur.clear();
                }
                _ => cur.push(ch),
            },
        }
    }
    out.push(unquote_field(&cur));
    out
}

fn unquote_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let inner = strip_surrounding_quotes(trimmed);
    if inner.len() == trimmed.len() {
        return inner.to_string();
    }
    let q = &trimmed[..1];
    inner.replace(&format!("{q}{q}"), q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_works() {
        assert_eq!(strip_surrounding_quotes("'a,b'"), "a,b");
        assert_eq!(strip_surrounding_quotes(r#""x""#), "x");
        assert_eq!(strip_surrounding_quotes("nq"), "nq");
    }

    #[test]
    fn splits_plain_record_and_trims() {
        let p = split_csv_record(" M1 , 80,100 ,0");
        assert_eq!(p, vec!["M1", "80", "100", "0"]);
    }

    #[test]
    fn keeps_commas_inside_quotes() {
        let line = r#""Press, line 4",85,'x,y',1"#;
        let p = split_csv_record(line);
        assert_eq!(p, vec!["Press, line 4", "85", "x,y", "1"]);
    }

    #[test]
    fn doubled_quotes_collapse() {
        let p = split_csv_record(r#""say ""hi""",2"#);
        assert_eq!(p, vec![r#"say "hi""#, "2"]);
    }

    #[test]
    fn trailing_empty_field_is_kept() {
        let p = split_csv_record("a,b,");
        assert_eq!(p, vec!["a", "b", ""]);
    }
}
