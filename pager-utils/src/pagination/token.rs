//! Callback data carried by keyboard buttons: encoding and parsing.
//!
//! Parsing follows the URL query-string convention of the default
//! `key=value&...` shape. Tokens built from a custom format are parsed the
//! same way and yield whatever pairs that produces; this is a known
//! limitation, not an error.

use std::collections::HashMap;

/// Default callback data format.
pub const DEFAULT_CALLBACK_FORMAT: &str =
    "command={COMMAND}&oldPage={OLD_PAGE}&newPage={NEW_PAGE}";

const COMMAND_PLACEHOLDER: &str = "{COMMAND}";
const OLD_PAGE_PLACEHOLDER: &str = "{OLD_PAGE}";
const NEW_PAGE_PLACEHOLDER: &str = "{NEW_PAGE}";

const COMMAND_KEY: &str = "command";
const OLD_PAGE_KEY: &str = "oldPage";
const NEW_PAGE_KEY: &str = "newPage";

/// Build the callback data for a button jumping from `old_page` to `new_page`.
///
/// Every occurrence of each placeholder in `format` is replaced.
pub fn encode_callback_data(
    format: &str,
    command: &str,
    old_page: usize,
    new_page: usize,
) -> String {
    format
        .replace(COMMAND_PLACEHOLDER, command)
        .replace(OLD_PAGE_PLACEHOLDER, &old_page.to_string())
        .replace(NEW_PAGE_PLACEHOLDER, &new_page.to_string())
}

/// Parse callback data as a URL query string.
///
/// Keys and values are percent-decoded and `+` reads as a space. Values stay
/// strings even when numeric. Empty segments and empty keys are skipped, a
/// pair without `=` maps to an empty value, and later duplicates win.
pub fn decode_callback_data(data: &str) -> HashMap<String, String> {
    form_urlencoded::parse(data.as_bytes())
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Typed view of callback data in the default format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackData {
    /// Logical command name the keyboard belongs to.
    pub command: String,
    /// Page that was selected when the keyboard was built.
    pub old_page: usize,
    /// Page the button navigates to.
    pub new_page: usize,
}

impl CallbackData {
    /// Read the default-format parameters from a decoded map.
    ///
    /// Returns `None` when a key is missing or a page is not a positive integer.
    pub fn from_params(params: &HashMap<String, String>) -> Option<Self> {
        let command = params.get(COMMAND_KEY)?.clone();
        let old_page = parse_page(params.get(OLD_PAGE_KEY)?)?;
        let new_page = parse_page(params.get(NEW_PAGE_KEY)?)?;

        Some(Self {
            command,
            old_page,
            new_page,
        })
    }

    /// Render back into the default format.
    pub fn encode(&self) -> String {
        encode_callback_data(
            DEFAULT_CALLBACK_FORMAT,
            &self.command,
            self.old_page,
            self.new_page,
        )
    }
}

/// Parse default-format callback data into its typed form.
pub fn parse_callback_data(data: &str) -> Option<CallbackData> {
    CallbackData::from_params(&decode_callback_data(data))
}

fn parse_page(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().filter(|page| *page >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_fills_default_format() {
        assert_eq!(
            encode_callback_data(DEFAULT_CALLBACK_FORMAT, "cmd", 2, 1),
            "command=cmd&oldPage=2&newPage=1"
        );
    }

    #[test]
    fn encode_replaces_repeated_and_missing_placeholders() {
        assert_eq!(
            encode_callback_data("{COMMAND};{OLD_PAGE};{NEW_PAGE}", "cmd", 2, 1),
            "cmd;2;1"
        );
        assert_eq!(
            encode_callback_data("{NEW_PAGE}/{NEW_PAGE}", "cmd", 2, 7),
            "7/7"
        );
        assert_eq!(encode_callback_data("static", "cmd", 2, 7), "static");
    }

    #[test]
    fn decode_keeps_values_as_strings() {
        let params = decode_callback_data("command=cmd&oldPage=2&newPage=1");
        assert_eq!(params.len(), 3);
        assert_eq!(params["command"], "cmd");
        assert_eq!(params["oldPage"], "2");
        assert_eq!(params["newPage"], "1");
    }

    #[test]
    fn decode_tolerates_odd_segments() {
        let params = decode_callback_data("a=1&&flag&a=2&=x");
        assert_eq!(params.len(), 2);
        assert_eq!(params["a"], "2");
        assert_eq!(params["flag"], "");
    }

    #[test]
    fn decode_percent_decodes_and_reads_plus_as_space() {
        let params = decode_callback_data("command=a%20b&note=x+y&oldPage=1");
        assert_eq!(params["command"], "a b");
        assert_eq!(params["note"], "x y");
        assert_eq!(params["oldPage"], "1");
    }

    #[test]
    fn typed_data_encodes_back_to_default_format() {
        let data = CallbackData {
            command: "list".to_owned(),
            old_page: 2,
            new_page: 9,
        };
        let encoded = data.encode();
        assert_eq!(encoded, "command=list&oldPage=2&newPage=9");
        assert_eq!(parse_callback_data(&encoded), Some(data));
    }

    #[test]
    fn custom_format_decodes_to_whatever_splits_out() {
        let params = decode_callback_data("cmd;2;1");
        assert_eq!(params.len(), 1);
        assert_eq!(params["cmd;2;1"], "");
        assert_eq!(parse_callback_data("cmd;2;1"), None);
    }

    #[test]
    fn typed_parse_requires_positive_pages() {
        assert_eq!(
            parse_callback_data("command=list&oldPage=3&newPage=4"),
            Some(CallbackData {
                command: "list".to_owned(),
                old_page: 3,
                new_page: 4,
            })
        );
        assert_eq!(parse_callback_data("command=list&oldPage=0&newPage=4"), None);
        assert_eq!(parse_callback_data("command=list&newPage=4"), None);
    }
}
