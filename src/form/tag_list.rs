use super::TextField;

/// An ordered set of short labels entered one at a time
///
/// Tags are trimmed; blank and duplicate tags are ignored.
pub struct TagList {
    label: &'static str,
    pub pending: TextField,
    tags: Vec<String>,
}

impl TagList {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            pending: TextField::single_line(label, placeholder),
            tags: Vec::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Add a tag, returns false if it was blank or already present
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Move the pending input into the list
    ///
    /// The input is cleared when it held a tag, even a duplicate one.
    pub fn commit_pending(&mut self) -> bool {
        let Some(value) = self.pending.value() else {
            return false;
        };
        self.pending.clear();
        self.add_tag(&value)
    }

    pub fn remove_last(&mut self) -> Option<String> {
        self.tags.pop()
    }

    /// Tags plus the not yet committed pending input
    pub fn values(&self) -> Vec<String> {
        let mut values = self.tags.clone();
        if let Some(pending) = self.pending.value()
            && !values.contains(&pending)
        {
            values.push(pending);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_tag_trims() {
        let mut list = TagList::new("Problem areas", "");
        assert!(list.add_tag("  fractions "));
        assert_eq!(list.tags(), ["fractions"]);
    }

    #[test]
    fn test_blank_and_duplicate_tags_are_ignored() {
        let mut list = TagList::new("Problem areas", "");
        assert!(list.add_tag("algebra"));
        assert!(!list.add_tag("algebra"));
        assert!(!list.add_tag("   "));
        assert_eq!(list.tags().len(), 1);
    }

    #[test]
    fn test_commit_pending_moves_input_into_list() {
        let mut list = TagList::new("Problem areas", "");
        list.pending.insert_str("geometry");
        assert!(list.commit_pending());
        assert_eq!(list.tags(), ["geometry"]);
        assert!(list.pending.is_blank());
    }

    #[test]
    fn test_commit_duplicate_clears_input() {
        let mut list = TagList::new("Problem areas", "");
        list.add_tag("geometry");
        list.pending.insert_str("geometry");
        assert!(!list.commit_pending());
        assert!(list.pending.is_blank());
        assert_eq!(list.tags().len(), 1);
    }

    #[test]
    fn test_commit_blank_pending_is_noop() {
        let mut list = TagList::new("Problem areas", "");
        assert!(!list.commit_pending());
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_last() {
        let mut list = TagList::new("Problem areas", "");
        list.add_tag("a");
        list.add_tag("b");
        assert_eq!(list.remove_last(), Some("b".to_string()));
        assert_eq!(list.tags(), ["a"]);
    }

    #[test]
    fn test_values_include_pending_input() {
        let mut list = TagList::new("Problem areas", "");
        list.add_tag("a");
        list.pending.insert_str("b");
        assert_eq!(list.values(), vec!["a", "b"]);
    }

    #[test]
    fn test_values_skip_duplicate_pending_input() {
        let mut list = TagList::new("Problem areas", "");
        list.add_tag("a");
        list.pending.insert_str("a");
        assert_eq!(list.values(), vec!["a"]);
    }

    proptest! {
        #[test]
        fn prop_tags_stay_unique_and_trimmed(inputs in prop::collection::vec("[ a-c]{0,4}", 0..20)) {
            let mut list = TagList::new("Problem areas", "");
            for input in &inputs {
                list.add_tag(input);
            }

            let tags = list.tags();
            for (i, tag) in tags.iter().enumerate() {
                prop_assert!(!tag.is_empty());
                prop_assert_eq!(tag.trim(), tag.as_str());
                prop_assert!(!tags[i + 1..].contains(tag));
            }
        }
    }
}
