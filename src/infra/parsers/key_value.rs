pub(super) fn key_value_pairs(contents: &str) -> impl Iterator<Item = (&str, &str)> {
    contents.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some((key, unquote(value.trim())))
    })
}

fn unquote(value: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{key_value_pairs, unquote};

    #[test]
    fn it_skips_comments_blank_lines_and_malformed_lines() {
        let contents = r#"
# a comment
NAME="Fedora Linux"
   # indented comment
no separator here
=orphan value
ID=fedora
"#;

        let pairs: Vec<_> = key_value_pairs(contents).collect();

        assert_eq!(pairs, vec![("NAME", "Fedora Linux"), ("ID", "fedora")]);
    }

    #[test]
    fn it_splits_on_the_first_separator_only() {
        let pairs: Vec<_> = key_value_pairs("ANSI_COLOR=a=b=c").collect();

        assert_eq!(pairs, vec![("ANSI_COLOR", "a=b=c")]);
    }

    #[rstest]
    #[case(r#""quoted""#, "quoted")]
    #[case("'single'", "single")]
    #[case("bare", "bare")]
    #[case(r#""mismatched'"#, r#""mismatched'"#)]
    #[case(r#"""#, r#"""#)]
    #[case(r#""""#, "")]
    #[case(r#""escaped \"inner\"""#, r#"escaped \"inner\""#)]
    fn it_strips_one_layer_of_matching_quotes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(unquote(raw), expected);
    }
}
