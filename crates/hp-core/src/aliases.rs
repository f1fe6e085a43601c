//! Alias assembly for pack entries.
//!
//! Every emoji gets its short `ch_` form as the first alias. A fixed
//! table adds extra alias words for specific slugs, rendered first with
//! the long prefix and then with the short prefix.

use hp_common::{EmojiName, NAME_PREFIX, SHORT_PREFIX};

/// Extra alias words for specific slugs.
const EXTRA_ALIASES: &[(&str, &[&str])] = &[
    ("mlm", &["gay"]),
    ("non_binary", &["nonbinary", "enby"]),
];

/// Build the alias list for an emoji: `ch_<slug>`, then any extra
/// aliases with the `celeste_hearts_` prefix, then the same with the
/// `ch_` prefix.
pub fn aliases_for(name: &EmojiName) -> Vec<String> {
    let mut aliases = vec![name.short()];
    if let Some((_, extras)) = EXTRA_ALIASES.iter().find(|(slug, _)| *slug == name.slug()) {
        aliases.extend(extras.iter().map(|extra| format!("{NAME_PREFIX}{extra}")));
        aliases.extend(extras.iter().map(|extra| format!("{SHORT_PREFIX}{extra}")));
    }
    aliases
}
