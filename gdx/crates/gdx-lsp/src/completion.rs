//! Keyword completion.

use gdx_lex::{keywords, TokenKind};

use crate::protocol::{CompletionItem, CompletionItemKind};

fn detail(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Pi | TokenKind::Tau | TokenKind::Inf | TokenKind::Nan => "built-in constant",
        _ => "language keyword",
    }
}

/// One item per keyword table entry, in table order.
pub fn keyword_completions() -> Vec<CompletionItem> {
    keywords()
        .map(|(spelling, kind)| CompletionItem {
            label: spelling.to_string(),
            kind: CompletionItemKind::Keyword,
            detail: detail(kind).to_string(),
            insert_text: spelling.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdx_lex::KEYWORDS;

    #[test]
    fn test_one_item_per_keyword() {
        let items = keyword_completions();
        assert_eq!(items.len(), KEYWORDS.len());
        assert!(items.iter().all(|item| !item.label.is_empty()));
        assert!(items.iter().all(|item| item.label == item.insert_text));
        assert_eq!(items[0].label, "if");
    }

    #[test]
    fn test_constants_have_own_detail() {
        let items = keyword_completions();
        let pi = items.iter().find(|item| item.label == "PI").unwrap();
        assert_eq!(pi.detail, "built-in constant");
        let func = items.iter().find(|item| item.label == "func").unwrap();
        assert_eq!(func.detail, "language keyword");
        assert_eq!(func.kind, CompletionItemKind::Keyword);
    }
}
