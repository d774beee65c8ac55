use crate::modules::bookmarks::BookmarkGroup;

use super::BookmarkStore;

impl BookmarkStore {
    /// Bookmarks partitioned by question, newest first inside each group,
    /// groups ordered by their newest bookmark.
    pub fn grouped(&self) -> Vec<BookmarkGroup> {
        let mut groups: Vec<BookmarkGroup> = Vec::new();

        for bookmark in &self.bookmarks {
            let label = bookmark.group_label();
            match groups.iter_mut().find(|g| g.question == label) {
                Some(group) => group.bookmarks.push(bookmark.clone()),
                None => groups.push(BookmarkGroup {
                    question: label.to_string(),
                    bookmarks: vec![bookmark.clone()],
                }),
            }
        }

        for group in &mut groups {
            group.bookmarks.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        }
        groups.sort_by(|a, b| b.latest_timestamp().cmp(&a.latest_timestamp()));

        groups
    }
}
