//! Feature tabs
//!
//! The tab bar is the client's router: exactly one tab is active and it
//! decides which view occupies the content region.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Tab {
    /// Step-by-step problem solving
    #[default]
    Solve,
    /// Concept explanation
    Concept,
    /// Homework grading
    Grade,
    /// Personalised learning advice
    Advice,
    /// Problem analysis from text or an image
    Analyze,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Solve, Tab::Concept, Tab::Grade, Tab::Advice, Tab::Analyze];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Solve => "Solve Problem",
            Tab::Concept => "Explain Concept",
            Tab::Grade => "Grade Homework",
            Tab::Advice => "Learning Advice",
            Tab::Analyze => "Analyze Problem",
        }
    }

    /// Stable name used on the command line (`--tab <route>`)
    pub fn route(self) -> &'static str {
        match self {
            Tab::Solve => "solve",
            Tab::Concept => "concept",
            Tab::Grade => "grade",
            Tab::Advice => "advice",
            Tab::Analyze => "analyze",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL
            .iter()
            .position(|&tab| tab == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_tab_is_solve() {
        assert_eq!(Tab::default(), Tab::Solve);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Tab::Solve.next(), Tab::Concept);
        assert_eq!(Tab::Analyze.next(), Tab::Solve);
    }

    #[test]
    fn test_previous_wraps() {
        assert_eq!(Tab::Concept.previous(), Tab::Solve);
        assert_eq!(Tab::Solve.previous(), Tab::Analyze);
    }

    #[test]
    fn test_routes_parse_back_through_clap() {
        for tab in Tab::ALL {
            let parsed = Tab::from_str(tab.route(), true).unwrap();
            assert_eq!(parsed, tab);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Tab::from_index(2), Some(Tab::Grade));
        assert_eq!(Tab::from_index(5), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_next_then_previous_is_identity(index in 0usize..5, steps in 0usize..20) {
            let start = Tab::from_index(index).unwrap();
            let mut tab = start;
            for _ in 0..steps {
                tab = tab.next();
            }
            for _ in 0..steps {
                tab = tab.previous();
            }
            prop_assert_eq!(tab, start);
        }
    }
}
