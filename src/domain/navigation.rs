//! Feed navigation: next/previous links derived from feed order.

use serde::Serialize;

use super::item::ItemId;
use crate::config::ITEM_LINK_PREFIX;

/// Links to the neighbours of an item within the published feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationLinks {
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl NavigationLinks {
    /// Locate `id` in `feed` and link its positional neighbours.
    ///
    /// Returns `None` when `id` is not part of the feed; an item that is
    /// reachable but unpublished therefore has no navigation at all.
    pub fn locate(feed: &[ItemId], id: &ItemId) -> Option<Self> {
        let index = feed.iter().position(|candidate| candidate == id)?;

        let prev = index.checked_sub(1).and_then(|i| feed.get(i));
        let next = feed.get(index + 1);

        Some(Self {
            next: next.map(item_link),
            prev: prev.map(item_link),
        })
    }
}

/// Public path of an item, e.g. `/items/<id>`.
pub fn item_link(id: &ItemId) -> String {
    format!("{}{}", ITEM_LINK_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(n: usize) -> Vec<ItemId> {
        (0..n).map(|i| ItemId::new(format!("id-{i}"))).collect()
    }

    #[test]
    fn test_links_follow_positional_neighbours() {
        let feed = feed(5);

        for k in 0..feed.len() {
            let links = NavigationLinks::locate(&feed, &feed[k]).unwrap();

            assert_eq!(links.prev.is_none(), k == 0, "prev at {k}");
            assert_eq!(links.next.is_none(), k == feed.len() - 1, "next at {k}");
            if k > 0 {
                assert_eq!(links.prev, Some(format!("/items/id-{}", k - 1)));
            }
            if k + 1 < feed.len() {
                assert_eq!(links.next, Some(format!("/items/id-{}", k + 1)));
            }
        }
    }

    #[test]
    fn test_single_item_feed_has_no_links() {
        let feed = feed(1);
        assert_eq!(
            NavigationLinks::locate(&feed, &feed[0]),
            Some(NavigationLinks::default())
        );
    }

    #[test]
    fn test_absent_item_has_no_position() {
        assert_eq!(NavigationLinks::locate(&feed(3), &ItemId::from("other")), None);
        assert_eq!(NavigationLinks::locate(&[], &ItemId::from("id-0")), None);
    }
}
