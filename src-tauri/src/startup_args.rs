use crate::OPEN_FILE_FLAG;

/// Returns the filename following the last `-o` flag, if any.
///
/// Every occurrence overwrites the previous one, so `-o a.json -o b.json`
/// yields `b.json`. A trailing `-o` without a value and an empty value are
/// both treated as "no file".
pub fn open_file_from_args<I, S>(args: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    let mut filename = None;
    for pair in args.windows(2) {
        if pair[0].as_ref() == OPEN_FILE_FLAG {
            filename = Some(pair[1].as_ref().to_string());
        }
    }

    filename.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::open_file_from_args;

    #[test]
    fn open_file_from_args_returns_none_without_flag() {
        assert_eq!(open_file_from_args(["node", "main.js"]), None);
        assert_eq!(open_file_from_args(Vec::<String>::new()), None);
    }

    #[test]
    fn open_file_from_args_takes_value_after_flag() {
        assert_eq!(
            open_file_from_args(["chlorine", "-o", "replay.hlt"]),
            Some("replay.hlt".to_string())
        );
    }

    #[test]
    fn open_file_from_args_prefers_last_occurrence() {
        assert_eq!(
            open_file_from_args(["node", "main.js", "-o", "a.json", "-o", "b.json"]),
            Some("b.json".to_string())
        );
    }

    #[test]
    fn open_file_from_args_ignores_trailing_flag_without_value() {
        assert_eq!(open_file_from_args(["chlorine", "-o"]), None);
        assert_eq!(
            open_file_from_args(["chlorine", "-o", "a.json", "-o"]),
            Some("a.json".to_string())
        );
    }

    #[test]
    fn open_file_from_args_treats_empty_value_as_missing() {
        assert_eq!(open_file_from_args(["chlorine", "-o", ""]), None);
    }

    #[test]
    fn open_file_from_args_accepts_flag_as_value() {
        assert_eq!(
            open_file_from_args(["chlorine", "-o", "-o"]),
            Some("-o".to_string())
        );
    }
}
