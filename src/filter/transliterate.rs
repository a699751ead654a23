//! Transliteration of file names to ASCII.

/// Maps arbitrary text to an ASCII approximation.
pub trait Transliterator: Send + Sync {
    /// Convert `text` to ASCII.
    fn to_ascii(&self, text: &str) -> String;
}

/// Default transliterator.
///
/// German umlauts and `ß` expand to two letters (`ö` → `oe`); everything
/// else is folded by `deunicode`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiTransliterator;

impl AsciiTransliterator {
    fn expand(c: char) -> Option<&'static str> {
        match c {
            'ä' => Some("ae"),
            'ö' => Some("oe"),
            'ü' => Some("ue"),
            'Ä' => Some("Ae"),
            'Ö' => Some("Oe"),
            'Ü' => Some("Ue"),
            'ß' => Some("ss"),
            'æ' => Some("ae"),
            'Æ' => Some("AE"),
            'œ' => Some("oe"),
            'Œ' => Some("OE"),
            _ => None,
        }
    }
}

impl Transliterator for AsciiTransliterator {
    fn to_ascii(&self, text: &str) -> String {
        if text.is_ascii() {
            return text.to_string();
        }

        let mut expanded = String::with_capacity(text.len());
        for c in text.chars() {
            match Self::expand(c) {
                Some(replacement) => expanded.push_str(replacement),
                None => expanded.push(c),
            }
        }

        deunicode::deunicode(&expanded)
    }
}

/// Disabled transliteration: text passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransliteration;

impl Transliterator for NoTransliteration {
    fn to_ascii(&self, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_umlauts_expand() {
        let t = AsciiTransliterator;
        assert_eq!(t.to_ascii("Brötchen für allë"), "Broetchen fuer alle");
        assert_eq!(t.to_ascii("Straße"), "Strasse");
        assert_eq!(t.to_ascii("Ärger"), "Aerger");
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(AsciiTransliterator.to_ascii("plain-name.jpg"), "plain-name.jpg");
    }

    #[test]
    fn test_non_latin_becomes_ascii() {
        let out = AsciiTransliterator.to_ascii("新しいファイル");
        assert!(out.is_ascii());
        assert!(!out.trim().is_empty());
    }

    #[test]
    fn test_disabled_keeps_text() {
        assert_eq!(NoTransliteration.to_ascii("Brötchen"), "Brötchen");
    }
}
