//! Property tests for derived counts

use proptest::prelude::*;
use sieve_domain::{count_words, Element, ElementType, ProcessedFile, ProcessingSession};

fn element_texts() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z \t\n]{0,40}", 0..20)
}

proptest! {
    #[test]
    fn word_count_is_sum_of_element_tokens(texts in element_texts()) {
        let mut file = ProcessedFile::failed("doc.txt", 0, "placeholder");
        for (idx, text) in texts.iter().enumerate() {
            file.elements.push(Element::new(ElementType::Narrative, text.clone(), idx));
        }

        let expected: usize = texts.iter().map(|t| t.split_whitespace().count()).sum();
        prop_assert_eq!(file.word_count(), expected);
        prop_assert_eq!(file.word_count(), file.word_count());
        prop_assert_eq!(file.element_count(), texts.len());
    }

    #[test]
    fn session_totals_match_per_file_sums(groups in prop::collection::vec(element_texts(), 0..6)) {
        let mut session = ProcessingSession::started_at(0);
        for (file_idx, texts) in groups.iter().enumerate() {
            let mut file = ProcessedFile::failed(format!("f{}.txt", file_idx), 0, "placeholder");
            for (idx, text) in texts.iter().enumerate() {
                file.elements.push(Element::new(ElementType::Text, text.clone(), idx));
            }
            session.push(file);
        }

        let stats = session.stats();
        let words: usize = groups.iter().flatten().map(|t| count_words(t)).sum();
        let elements: usize = groups.iter().map(Vec::len).sum();
        prop_assert_eq!(stats.total_files, groups.len());
        prop_assert_eq!(stats.total_words, words);
        prop_assert_eq!(stats.total_elements, elements);
    }
}
