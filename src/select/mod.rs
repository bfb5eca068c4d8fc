// file: src/select/mod.rs
// description: candidate disambiguation policy and selector implementations
// reference: https://docs.rs/dialoguer

use colored::*;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::error::{LookupError, Result};
use crate::models::Candidate;

/// Capability for picking one candidate out of several. The lookup pipeline
/// depends on this trait instead of the console directly so the selection
/// policy stays testable.
pub trait CandidateSelector {
    fn select(&self, labels: &[&str]) -> Result<usize>;
}

/// Selection policy: zero candidates is fatal, a single candidate is chosen
/// without prompting, multiple candidates go through the selector. An index
/// outside the printed list is a fatal selection error.
pub fn choose<'a>(
    candidates: &'a [Candidate],
    selector: &dyn CandidateSelector,
) -> Result<&'a Candidate> {
    match candidates.len() {
        0 => Err(LookupError::NoBooks),
        1 => Ok(&candidates[0]),
        _ => {
            let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
            let index = selector.select(&labels)?;
            candidates.get(index).ok_or_else(|| {
                LookupError::Selection(format!(
                    "index {} out of range (0-{})",
                    index,
                    candidates.len() - 1
                ))
            })
        }
    }
}

/// Interactive selector: enumerates the titles and blocks on console input
/// for a numeric index.
pub struct ConsoleSelector;

impl CandidateSelector for ConsoleSelector {
    fn select(&self, labels: &[&str]) -> Result<usize> {
        println!("There are multiple titles available. Please select 1 by entering their index");
        for (index, label) in labels.iter().enumerate() {
            println!("- {} : {}", index.to_string().cyan(), label);
        }

        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Which book do you choose?")
            .interact_text()
            .map_err(|e| LookupError::Selection(e.to_string()))?;

        answer
            .trim()
            .parse::<usize>()
            .map_err(|e| LookupError::Selection(format!("'{}' is not an index: {}", answer, e)))
    }
}

/// Non-interactive selector with a preset index. Backs the `--select` flag
/// and the tests.
pub struct FixedSelector {
    pub index: usize,
}

impl CandidateSelector for FixedSelector {
    fn select(&self, _labels: &[&str]) -> Result<usize> {
        Ok(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidates(n: usize) -> Vec<Candidate> {
        (0..n)
            .map(|i| {
                Candidate::new(
                    format!("Book {}", i),
                    format!("http://dbpedia.org/resource/Book_{}", i),
                )
            })
            .collect()
    }

    #[test]
    fn test_zero_candidates_is_fatal() {
        let result = choose(&[], &FixedSelector { index: 0 });
        assert!(matches!(result, Err(LookupError::NoBooks)));
    }

    #[test]
    fn test_single_candidate_selected_without_prompting() {
        struct PanickingSelector;
        impl CandidateSelector for PanickingSelector {
            fn select(&self, _labels: &[&str]) -> Result<usize> {
                panic!("selector must not be consulted for a single candidate");
            }
        }

        let list = candidates(1);
        let chosen = choose(&list, &PanickingSelector).unwrap();
        assert_eq!(chosen.label, "Book 0");
    }

    #[test]
    fn test_kth_candidate_matches_listed_order() {
        let list = candidates(4);
        for k in 0..4 {
            let chosen = choose(&list, &FixedSelector { index: k }).unwrap();
            assert_eq!(chosen.label, format!("Book {}", k));
        }
    }

    #[test]
    fn test_out_of_range_index_is_fatal() {
        let list = candidates(3);
        let result = choose(&list, &FixedSelector { index: 3 });
        assert!(matches!(result, Err(LookupError::Selection(_))));
    }
}
