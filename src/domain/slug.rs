//! Slug to item id mapping.
//!
//! A slug ends with the item id after its last `-`:
//! `hello-world-472d74ac4df2bedd120dd49dd83c7e44`. The title part is
//! free text and never inspected.

use once_cell::sync::Lazy;
use regex::Regex;

use super::item::ItemId;
use crate::config::ITEM_ID_HEX_LENGTH;

static HEX_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[0-9A-Fa-f]{{{}}}$", ITEM_ID_HEX_LENGTH))
        .expect("hex id pattern is valid")
});

/// Extract the item id encoded at the end of a slug.
///
/// Hex ids are case-insensitive and come back lower-cased; any other id
/// is returned verbatim.
pub fn id_from_slug(slug: &str) -> Option<ItemId> {
    let slug = slug.trim().trim_end_matches('/');
    let id = slug.rsplit_once('-').map_or(slug, |(_, id)| id);

    if id.is_empty() {
        return None;
    }

    if HEX_ID.is_match(id) {
        Some(ItemId::new(id.to_ascii_lowercase()))
    } else {
        Some(ItemId::from(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "472d74ac4df2bedd120dd49dd83c7e44";

    #[test]
    fn test_id_from_titled_slug() {
        assert_eq!(
            id_from_slug(&format!("my-first-post-{ID}")),
            Some(ItemId::from(ID))
        );
    }

    #[test]
    fn test_bare_id_is_its_own_slug() {
        assert_eq!(id_from_slug(ID), Some(ItemId::from(ID)));
    }

    #[test]
    fn test_hex_id_is_lowercased() {
        assert_eq!(
            id_from_slug(&format!("post-{}", ID.to_uppercase())),
            Some(ItemId::from(ID))
        );
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(id_from_slug(&format!("post-{ID}/")), Some(ItemId::from(ID)));
    }

    #[test]
    fn test_title_characters_do_not_matter() {
        for title in ["café-au-lait", "hello_world", "c++-tips", "2024", "über--double"] {
            assert_eq!(
                id_from_slug(&format!("{title}-{ID}")),
                Some(ItemId::from(ID)),
                "title {title}"
            );
        }
    }

    #[test]
    fn test_non_hex_id_is_kept_verbatim() {
        assert_eq!(
            id_from_slug("my-post-Gb9K8sCMzZH"),
            Some(ItemId::from("Gb9K8sCMzZH"))
        );
        assert_eq!(id_from_slug("42"), Some(ItemId::from("42")));
    }

    #[test]
    fn test_unresolvable_slugs() {
        assert_eq!(id_from_slug(""), None);
        assert_eq!(id_from_slug("  "), None);
        assert_eq!(id_from_slug("title-"), None);
        assert_eq!(id_from_slug("title-/"), None);
        assert_eq!(id_from_slug("-"), None);
    }
}
