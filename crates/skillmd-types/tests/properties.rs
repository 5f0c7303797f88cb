use proptest::prelude::*;
use skillmd_types::{BudgetStatus, SectionBreakdown};

proptest! {
    #[test]
    fn budget_status_partitions_on_budget(tokens in 0usize..100_000, budget in 0usize..100_000) {
        let status = BudgetStatus::from_estimate(tokens, budget);
        if tokens <= budget {
            prop_assert_eq!(status, BudgetStatus::Pass);
        } else {
            prop_assert_eq!(status, BudgetStatus::Fail);
        }
    }

    #[test]
    fn section_total_equals_sum_of_adds(entries in prop::collection::vec(("[a-z]{1,6}", 0usize..1000), 0..30)) {
        let mut sections = SectionBreakdown::new();
        let mut expected = 0usize;
        for (title, tokens) in &entries {
            sections.add(title, *tokens);
            expected += tokens;
        }
        prop_assert_eq!(sections.total_tokens(), expected);
    }

    #[test]
    fn section_breakdown_json_round_trips(entries in prop::collection::vec(("[a-z]{1,6}", 0usize..1000), 0..20)) {
        let mut sections = SectionBreakdown::new();
        for (title, tokens) in &entries {
            sections.add(title, *tokens);
        }
        let json = serde_json::to_string(&sections).unwrap();
        let back: SectionBreakdown = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, sections);
    }
}
