//! Message template placeholder substitution.
//!
//! A message template may contain `{key}` tokens. Each token whose key is
//! present in the caller-supplied [`Context`] is replaced with the context
//! value; tokens with no matching key are left verbatim, braces included.
//! There is no escaping mechanism for literal braces.

use std::borrow::Cow;
use std::collections::HashMap;

/// Placeholder values for one log call, keyed by placeholder name.
pub type Context<'a> = HashMap<&'a str, String>;

/// Replaces every `{key}` token in `template` whose key is present in
/// `context`.
///
/// Substitution is simultaneous: the template is scanned exactly once, and
/// substituted values are emitted as-is. A value that itself contains a
/// `{token}` is never rescanned.
///
/// A template without any `{` is returned borrowed, unmodified.
pub fn substitute<'a>(template: &'a str, context: &Context<'_>) -> Cow<'a, str> {
    if !template.contains('{') {
        return Cow::Borrowed(template);
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        // A token is `{key}` with no brace inside the key. If another `{`
        // shows up before the closing `}`, or the input ends, this `{` is
        // literal text.
        match after.find(|c| c == '{' || c == '}') {
            Some(i) if after.as_bytes()[i] == b'}' => {
                let key = &after[..i];
                match context.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[i + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}
