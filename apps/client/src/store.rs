use std::sync::Arc;

use crate::models::ResultDocument;

/// Holds the most recent analysis result, if any.
///
/// A stored document is never mutated: `set` replaces it wholesale and
/// `clear` drops it.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    current: Option<Arc<ResultDocument>>,
}

impl ResultStore {
    pub fn set(&mut self, doc: ResultDocument) -> Arc<ResultDocument> {
        let doc = Arc::new(doc);
        self.current = Some(Arc::clone(&doc));
        doc
    }

    pub fn get(&self) -> Option<Arc<ResultDocument>> {
        self.current.clone()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample_document;

    #[test]
    fn test_last_write_wins() {
        let mut store = ResultStore::default();
        assert!(store.get().is_none());

        store.set(sample_document());
        let mut second = sample_document();
        second.overall_rating.rating = "Excellent".to_string();
        store.set(second);

        assert_eq!(store.get().unwrap().overall_rating.rating, "Excellent");
    }

    #[test]
    fn test_clear_keeps_handed_out_documents_intact() {
        let mut store = ResultStore::default();
        let held = store.set(sample_document());
        store.clear();

        assert!(store.get().is_none());
        assert_eq!(held.skills.len(), 3);
    }
}
