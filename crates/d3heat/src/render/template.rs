//! Single-pass placeholder substitution.
//!
//! All `$KEY$` tokens are replaced in one automaton pass over the template,
//! so the result cannot depend on substitution order and placeholder names
//! that are substrings of one another cannot corrupt each other — the
//! failure mode of replacing tokens one by one in a loop.

use aho_corasick::{AhoCorasick, MatchKind};

use super::RenderContext;
use crate::errors::RenderError;

/// Replace every occurrence of every context key's `$KEY$` token.
///
/// Placeholders present in the template but absent from the context are left
/// verbatim by construction: no pattern is built for them, so the pass never
/// touches them. That silent no-op is part of the renderer's contract.
pub fn substitute(template: &str, ctx: &RenderContext) -> Result<String, RenderError> {
    if ctx.is_empty() {
        return Ok(template.to_string());
    }

    let patterns: Vec<String> = ctx
        .entries()
        .iter()
        .map(|(key, _)| format!("${key}$"))
        .collect();
    let replacements: Vec<&str> = ctx.entries().iter().map(|(_, v)| v.as_str()).collect();

    let automaton = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(&patterns)?;

    Ok(automaton.replace_all(template, &replacements))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let mut ctx = RenderContext::new();
        ctx.insert("TITLE", "X");
        let out = substitute("<h1>$TITLE$</h1><title>$TITLE$</title>", &ctx).unwrap();
        assert_eq!(out, "<h1>X</h1><title>X</title>");
    }

    #[test]
    fn unmapped_placeholder_stays_verbatim() {
        let mut ctx = RenderContext::new();
        ctx.insert("TITLE", "X");
        let out = substitute("$TITLE$ and $MISSING$", &ctx).unwrap();
        assert_eq!(out, "X and $MISSING$");
    }

    #[test]
    fn substring_placeholders_do_not_collide() {
        // WIDTH is a prefix of WIDTH_DROPDOWN; a naive replace-in-a-loop
        // would mangle the longer token.
        let mut ctx = RenderContext::new();
        ctx.insert("WIDTH", 720).insert("WIDTH_DROPDOWN", 920);
        let out = substitute("w=$WIDTH$ dd=$WIDTH_DROPDOWN$", &ctx).unwrap();
        assert_eq!(out, "w=720 dd=920");
    }

    #[test]
    fn order_independence() {
        let mut a = RenderContext::new();
        a.insert("A", 1).insert("B", 2);
        let mut b = RenderContext::new();
        b.insert("B", 2).insert("A", 1);
        let template = "$A$/$B$/$A$";
        assert_eq!(
            substitute(template, &a).unwrap(),
            substitute(template, &b).unwrap()
        );
    }

    #[test]
    fn value_containing_placeholder_text_is_not_rescanned() {
        // Single pass: substituted values are emitted as-is, never matched
        // against the pattern set again.
        let mut ctx = RenderContext::new();
        ctx.insert("A", "$B$").insert("B", "done");
        let out = substitute("$A$ $B$", &ctx).unwrap();
        assert_eq!(out, "$B$ done");
    }

    #[test]
    fn empty_context_returns_template_unchanged() {
        let out = substitute("$ANYTHING$", &RenderContext::new()).unwrap();
        assert_eq!(out, "$ANYTHING$");
    }
}
