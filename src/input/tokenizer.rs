/// Bytes that separate tokens: space, tab, carriage return, newline, bell.
pub const DELIMITERS: [u8; 5] = [b' ', b'\t', b'\r', b'\n', 0x07];

/// Splits a line into its delimiter-separated tokens.
///
/// No quoting or escaping is recognised, and the bytes are not required to
/// be UTF-8. The tokens borrow from `line`.
pub fn tokenize(line: &[u8]) -> Vec<&[u8]> {
    line.split(|b| DELIMITERS.contains(b))
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<&str> {
        tokenize(line.as_bytes())
            .into_iter()
            .map(|t| std::str::from_utf8(t).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert!(tokenize(b"").is_empty());
        assert!(tokenize(b" \t\r\n\x07  ").is_empty());
    }

    #[test]
    fn test_splits_on_runs_of_delimiters() {
        assert_eq!(words("ls  -l\t\t/tmp"), vec!["ls", "-l", "/tmp"]);
        assert_eq!(words("  echo\x07hi\r\n"), vec!["echo", "hi"]);
    }

    #[test]
    fn test_first_token_is_prefix_up_to_delimiter() {
        for line in ["cd /tmp", "exit 1 2", "x\ty", "single"] {
            let bytes = line.as_bytes();
            let end = bytes
                .iter()
                .position(|b| DELIMITERS.contains(b))
                .unwrap_or(bytes.len());
            assert_eq!(tokenize(bytes)[0], &bytes[..end]);
        }
    }

    #[test]
    fn test_no_quote_handling() {
        assert_eq!(words("echo \"a b\" 'c'"), vec!["echo", "\"a", "b\"", "'c'"]);
    }

    #[test]
    fn test_non_utf8_token_bytes_unchanged() {
        let line = b"ls caf\xe9.txt";
        let tokens = tokenize(line);
        assert_eq!(tokens, vec![&b"ls"[..], &b"caf\xe9.txt"[..]]);
    }

    #[test]
    fn test_tokens_borrow_from_line() {
        let line = b"pwd now".to_vec();
        let tokens = tokenize(&line);
        let range = line.as_ptr() as usize..line.as_ptr() as usize + line.len();
        assert!(tokens.iter().all(|t| range.contains(&(t.as_ptr() as usize))));
    }
}
