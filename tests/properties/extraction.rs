//! Property tests for fact extraction.

use proptest::prelude::*;

use aligner::domain::services::FactExtractor;
use aligner::domain::value_objects::Vocabulary;

fn extension() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![".js", ".ts", ".py", ".md", ".json", ".yaml", ".yml"])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: extraction never panics and line numbers stay inside the file.
    #[test]
    fn property_extraction_line_numbers_in_range(
        content in "(?s).{0,400}",
        ext in extension(),
    ) {
        let vocab = Vocabulary::default();
        let fact = FactExtractor::new(&vocab).extract("f", &content, ext);

        prop_assert_eq!(fact.line_count, content.split('\n').count());
        for symbol in &fact.declared_symbols {
            prop_assert!(symbol.line_number >= 1 && symbol.line_number <= fact.line_count);
        }
        for statement in &fact.purpose_statements {
            prop_assert!(statement.line_number >= 1 && statement.line_number <= fact.line_count);
            prop_assert!(!statement.text.trim().is_empty());
        }
        for hit in &fact.keyword_hits {
            prop_assert!(hit.count > 0);
        }
    }

    /// PROPERTY: a `Purpose:` label is found on the line it was written on.
    #[test]
    fn property_purpose_label_found(
        leading_lines in 0usize..20,
        text in "[a-z][a-z ]{0,30}[a-z]",
    ) {
        let content = format!("{}Purpose: {}\n", "x\n".repeat(leading_lines), text);
        let vocab = Vocabulary::default();
        let fact = FactExtractor::new(&vocab).extract("README.md", &content, ".md");

        prop_assert_eq!(fact.purpose_statements.len(), 1);
        prop_assert_eq!(&fact.purpose_statements[0].text, &text);
        prop_assert_eq!(fact.purpose_statements[0].line_number, leading_lines + 1);
    }
}
