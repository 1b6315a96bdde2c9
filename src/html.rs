// SPDX-License-Identifier: MPL-2.0
//! HTML escaping for text and attribute contexts.

/// Escapes `&`, `"`, `'`, `<` and `>` with their character references.
///
/// The ampersand is replaced first so the entity text produced by the later
/// replacements is not re-escaped. Input that already contains entities gets
/// its ampersands double-escaped (`&amp;` becomes `&amp;amp;`); callers are
/// expected to pass raw text.
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(
            escape(r#"<a href="x" title='y'>&</a>"#),
            "&lt;a href=&quot;x&quot; title=&#39;y&#39;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn output_contains_no_raw_special_characters() {
        let escaped = escape("Fish & <chips> \"forever\" 'n' ever");
        for ch in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(ch), "raw {:?} in {:?}", ch, escaped);
        }
        // Every remaining ampersand starts an entity we produced.
        for (index, _) in escaped.match_indices('&') {
            let rest = &escaped[index..];
            assert!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&quot;")
                    || rest.starts_with("&#39;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;"),
                "stray ampersand in {:?}",
                escaped
            );
        }
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape("white cats"), "white cats");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn already_escaped_text_double_escapes_ampersands() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
        assert_eq!(escape("&lt;b&gt;"), "&amp;lt;b&amp;gt;");
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        assert_eq!(escape("mačke & psi"), "mačke &amp; psi");
    }
}
