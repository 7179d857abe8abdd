//! Line-oriented WML parser.

use crate::config::Config;
use crate::util::{ExploderError, ExploderResult};

/// Strips `#` comments outside of quoted values.
///
/// Comment-only lines become empty so parse errors keep their line numbers.
/// A leading byte order mark is dropped. Macro directives (`#define`,
/// `{MACRO}`) are not expanded.
pub fn preprocess(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        let mut in_quotes = false;
        let mut end = line.len();
        for (idx, ch) in line.char_indices() {
            match ch {
                '"' => in_quotes = !in_quotes,
                '#' if !in_quotes => {
                    end = idx;
                    break;
                }
                _ => {}
            }
        }
        out.push_str(line[..end].trim_end());
        out.push('\n');
    }
    out
}

struct OpenTag {
    tag: String,
    line: usize,
    node: Config,
}

pub(crate) fn parse_document(text: &str) -> ExploderResult<Config> {
    let mut root = Config::new();
    let mut stack: Vec<OpenTag> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(tag) = trimmed
            .strip_prefix("[/")
            .and_then(|rest| rest.strip_suffix(']'))
        {
            let open = stack.pop().ok_or_else(|| error(line, format!("unexpected [/{tag}]")))?;
            if open.tag != tag {
                return Err(error(
                    line,
                    format!("[/{tag}] does not close [{}] opened on line {}", open.tag, open.line),
                ));
            }
            let parent = stack.last_mut().map_or(&mut root, |top| &mut top.node);
            parent.push_child(open.tag, open.node);
        } else if let Some(tag) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            if !is_identifier(tag) {
                return Err(error(line, format!("invalid tag name [{tag}]")));
            }
            stack.push(OpenTag {
                tag: tag.to_string(),
                line,
                node: Config::new(),
            });
        } else if let Some((key, value)) = trimmed.split_once('=') {
            let key = key.trim();
            if !is_identifier(key) {
                return Err(error(line, format!("invalid attribute name '{key}'")));
            }
            let value = unquote(value.trim()).map_err(|reason| error(line, reason.to_string()))?;
            let node = stack.last_mut().map_or(&mut root, |top| &mut top.node);
            node.set(key, value);
        } else {
            return Err(error(line, format!("unexpected text '{trimmed}'")));
        }
    }

    if let Some(open) = stack.pop() {
        return Err(error(open.line, format!("missing closing tag [/{}]", open.tag)));
    }
    Ok(root)
}

fn error(line: usize, reason: String) -> ExploderError {
    ExploderError::Parse { line, reason }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Removes surrounding quotes and the translatable `_` marker.
///
/// Inside quotes, `""` stands for one literal quote.
fn unquote(value: &str) -> Result<String, &'static str> {
    let value = match value.strip_prefix('_') {
        Some(rest) if rest.trim_start().starts_with('"') => rest.trim_start(),
        _ => value,
    };
    let Some(inner) = value.strip_prefix('"') else {
        return Ok(value.to_string());
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '"' {
            out.push(ch);
            continue;
        }
        if chars.peek() == Some(&'"') {
            chars.next();
            out.push('"');
            continue;
        }
        return if chars.next().is_none() {
            Ok(out)
        } else {
            Err("text after closing quote")
        };
    }
    Err("unterminated quoted value")
}

#[cfg(test)]
mod tests {
    use super::{parse_document, preprocess, unquote};
    use crate::util::ExploderError;

    #[test]
    fn preprocess_strips_comments_but_keeps_lines() {
        let text = "# header\nname=a # trailing\ntext=\"not # a comment\"\n";
        assert_eq!(
            preprocess(text),
            "\nname=a\ntext=\"not # a comment\"\n"
        );
    }

    #[test]
    fn preprocess_drops_byte_order_mark() {
        assert_eq!(preprocess("\u{feff}[part]\n[/part]\n"), "[part]\n[/part]\n");
    }

    #[test]
    fn unquote_handles_escapes_and_markers() {
        assert_eq!(unquote("plain").unwrap(), "plain");
        assert_eq!(unquote("\"a \"\"b\"\"\"").unwrap(), "a \"b\"");
        assert_eq!(unquote("_ \"Grass\"").unwrap(), "Grass");
        assert_eq!(unquote("_underscored").unwrap(), "_underscored");
        assert!(unquote("\"open").is_err());
        assert!(unquote("\"a\" b").is_err());
    }

    #[test]
    fn nested_tags_build_a_tree() {
        let cfg = parse_document("top=1\n[outer]\n  [inner]\n    k=v\n  [/inner]\n[/outer]\n")
            .unwrap();
        assert_eq!(cfg.get("top"), "1");
        let outer = cfg.children("outer").next().unwrap();
        let inner = outer.children("inner").next().unwrap();
        assert_eq!(inner.get("k"), "v");
    }

    #[test]
    fn mismatched_closing_tag_reports_line() {
        let err = parse_document("[mask]\nname=a\n[/part]\n").unwrap_err();
        assert_eq!(
            err,
            ExploderError::Parse {
                line: 3,
                reason: "[/part] does not close [mask] opened on line 1".into(),
            }
        );
    }

    #[test]
    fn unclosed_tag_reports_opening_line() {
        let err = parse_document("\n[part]\nname=a\n").unwrap_err();
        assert_eq!(
            err,
            ExploderError::Parse {
                line: 2,
                reason: "missing closing tag [/part]".into(),
            }
        );
    }

    #[test]
    fn stray_text_is_rejected() {
        let err = parse_document("[part]\nname a\n[/part]\n").unwrap_err();
        assert!(matches!(err, ExploderError::Parse { line: 2, .. }));
    }
}
