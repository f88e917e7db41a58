//! Target Selector — picks one candidate row at random and resolves its contact.
//!
//! The random pick counters the model's habit of always writing to the first company
//! in a list. Contact resolution is pure pattern matching (see `candidates::Contact`);
//! the model never sees anything but the already-resolved contact.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::candidates::{candidate_lines, CandidateRecord, Contact};

/// The candidate chosen for one writer attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// The selected row, trimmed, exactly as it appears in the list.
    pub line: String,
    pub record: CandidateRecord,
    pub contact: Contact,
}

impl Target {
    pub fn from_line(line: &str) -> Self {
        Self {
            line: line.to_string(),
            record: CandidateRecord::parse(line),
            contact: Contact::extract(line),
        }
    }
}

/// Chooses one candidate row uniformly at random.
///
/// Returns `None` when the list holds no row with a `|` separator.
pub fn select_target<R>(raw_list: &str, rng: &mut R) -> Option<Target>
where
    R: Rng + ?Sized,
{
    let lines = candidate_lines(raw_list);
    lines.choose(rng).map(|line| Target::from_line(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::NO_CONTACT_SENTINEL;
    use std::collections::HashSet;

    const LIST: &str = "Acme AI | hello@acme.ai | AI tooling\n\
        \n\
        Beta SaaS | https://beta.io/contact | B2B SaaS\n\
        not a candidate row\n\
        Gamma Robotics | no public contact | hardware\n";

    #[test]
    fn test_single_line_is_always_selected() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let target = select_target("Acme AI | hello@acme.ai | AI tooling", &mut rng).unwrap();
            assert_eq!(target.line, "Acme AI | hello@acme.ai | AI tooling");
            assert_eq!(target.contact.as_str(), "hello@acme.ai");
            assert_eq!(target.record.name, "Acme AI");
        }
    }

    #[test]
    fn test_selection_is_member_of_filtered_set() {
        let filtered: HashSet<&str> = candidate_lines(LIST).into_iter().collect();
        assert_eq!(filtered.len(), 3);

        let mut rng = rand::rng();
        for _ in 0..200 {
            let target = select_target(LIST, &mut rng).unwrap();
            assert!(filtered.contains(target.line.as_str()), "{}", target.line);
        }
    }

    #[test]
    fn test_selection_reaches_more_than_the_first_row() {
        let mut rng = rand::rng();
        let picked: HashSet<String> = (0..300)
            .filter_map(|_| select_target(LIST, &mut rng))
            .map(|t| t.record.name)
            .collect();
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_url_fallback_scenario() {
        let target = Target::from_line("Beta SaaS | https://beta.io/contact | B2B SaaS");
        assert_eq!(target.contact.as_str(), "https://beta.io/contact");
    }

    #[test]
    fn test_sentinel_scenario() {
        let target = Target::from_line("Gamma Robotics | no public contact | hardware");
        assert_eq!(target.contact.as_str(), NO_CONTACT_SENTINEL);
    }

    #[test]
    fn test_empty_or_malformed_list_yields_none() {
        let mut rng = rand::rng();
        assert!(select_target("", &mut rng).is_none());
        assert!(select_target("\n   \n", &mut rng).is_none());
        assert!(select_target("no separators here\nnor here", &mut rng).is_none());
    }
}
