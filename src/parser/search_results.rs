// file: src/parser/search_results.rs
// description: extracts book-typed candidates from the lookup XML response
// reference: DBpedia lookup PrefixSearch result schema

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{LookupError, Result};
use crate::models::Candidate;

const RESULT_TAG: &str = "Result";
const CLASSES_TAG: &str = "Classes";
const LABEL_TAG: &str = "Label";
const URI_TAG: &str = "URI";

#[derive(Default)]
struct ResultBuilder {
    label: Option<String>,
    uri: Option<String>,
    is_book: bool,
    classes_seen: bool,
}

/// Parse a lookup search response and keep only entities typed as the given
/// book class.
///
/// Each `<Result>` groups a result-level `<Label>` and `<URI>` ahead of the
/// `<Classes>` block; fields are captured by role within the group, so the
/// label/identifier pairing matches the response layout. A result qualifies
/// when any class URI inside `<Classes>` equals `book_class`. Candidates come
/// back in response order; a repeated title keeps its original position but
/// takes the latest identifier.
pub fn parse_search_results(xml: &[u8], book_class: &str) -> Result<Vec<Candidate>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut candidates: Vec<Candidate> = Vec::new();
    let mut buf = Vec::new();

    let mut current: Option<ResultBuilder> = None;
    let mut in_classes = false;
    let mut current_element = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                current_element = name.clone();

                if name == RESULT_TAG {
                    current = Some(ResultBuilder::default());
                    in_classes = false;
                } else if name == CLASSES_TAG {
                    in_classes = true;
                    if let Some(ref mut result) = current {
                        result.classes_seen = true;
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                if name == CLASSES_TAG {
                    in_classes = false;
                } else if name == RESULT_TAG {
                    if let Some(result) = current.take() {
                        if result.is_book {
                            if let (Some(label), Some(uri)) = (result.label, result.uri) {
                                upsert(&mut candidates, label, uri);
                            }
                        }
                    }
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                if let Some(ref mut result) = current {
                    let text = e.unescape().unwrap_or_default().to_string();
                    if text.is_empty() {
                        continue;
                    }

                    if in_classes {
                        if current_element == URI_TAG && text == book_class {
                            result.is_book = true;
                        }
                    } else if !result.classes_seen {
                        // Only the group-level label/identifier preceding
                        // <Classes> belong to the result itself; anything
                        // after (categories, templates) is ignored.
                        if current_element == LABEL_TAG && result.label.is_none() {
                            result.label = Some(text);
                        } else if current_element == URI_TAG && result.uri.is_none() {
                            result.uri = Some(text);
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(LookupError::SearchParse(format!("XML parse error: {}", e)));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(candidates)
}

// Repeated titles keep their first position but overwrite the identifier.
fn upsert(candidates: &mut Vec<Candidate>, label: String, uri: String) {
    if let Some(existing) = candidates.iter_mut().find(|c| c.label == label) {
        existing.uri = uri;
    } else {
        candidates.push(Candidate { label, uri });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BOOK_CLASS: &str = "http://dbpedia.org/ontology/Book";

    fn result_xml(label: &str, uri: &str, class_uris: &[&str]) -> String {
        let classes: String = class_uris
            .iter()
            .map(|c| format!("<Class><Label>x</Label><URI>{}</URI></Class>", c))
            .collect();
        format!(
            "<Result>\
               <Label>{}</Label>\
               <URI>{}</URI>\
               <Description>A description.</Description>\
               <Classes>{}</Classes>\
               <Categories><Category><Label>Novels</Label>\
                 <URI>http://dbpedia.org/resource/Category:Novels</URI>\
               </Category></Categories>\
             </Result>",
            label, uri, classes
        )
    }

    fn wrap(results: &[String]) -> Vec<u8> {
        format!("<ArrayOfResult>{}</ArrayOfResult>", results.concat())
            .into_bytes()
    }

    #[test]
    fn test_single_book_result() {
        let xml = wrap(&[result_xml(
            "Dune (novel)",
            "http://dbpedia.org/resource/Dune_(novel)",
            &[BOOK_CLASS, "http://dbpedia.org/ontology/WrittenWork"],
        )]);

        let candidates = parse_search_results(&xml, BOOK_CLASS).unwrap();
        assert_eq!(
            candidates,
            vec![Candidate::new(
                "Dune (novel)",
                "http://dbpedia.org/resource/Dune_(novel)"
            )]
        );
    }

    #[test]
    fn test_non_book_results_are_filtered_out() {
        let xml = wrap(&[
            result_xml(
                "Dune, Belgium",
                "http://dbpedia.org/resource/Dune,_Belgium",
                &["http://dbpedia.org/ontology/Place"],
            ),
            result_xml(
                "Dune (film)",
                "http://dbpedia.org/resource/Dune_(film)",
                &["http://dbpedia.org/ontology/Film"],
            ),
        ]);

        let candidates = parse_search_results(&xml, BOOK_CLASS).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_multiple_books_keep_response_order() {
        let xml = wrap(&[
            result_xml(
                "Dune (novel)",
                "http://dbpedia.org/resource/Dune_(novel)",
                &[BOOK_CLASS],
            ),
            result_xml(
                "Dune Messiah",
                "http://dbpedia.org/resource/Dune_Messiah",
                &[BOOK_CLASS],
            ),
            result_xml(
                "Children of Dune",
                "http://dbpedia.org/resource/Children_of_Dune",
                &[BOOK_CLASS],
            ),
        ]);

        let candidates = parse_search_results(&xml, BOOK_CLASS).unwrap();
        let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Dune (novel)", "Dune Messiah", "Children of Dune"]
        );
    }

    #[test]
    fn test_duplicate_label_keeps_position_takes_latest_uri() {
        let xml = wrap(&[
            result_xml("Dune", "http://dbpedia.org/resource/Dune_A", &[BOOK_CLASS]),
            result_xml(
                "Dune Messiah",
                "http://dbpedia.org/resource/Dune_Messiah",
                &[BOOK_CLASS],
            ),
            result_xml("Dune", "http://dbpedia.org/resource/Dune_B", &[BOOK_CLASS]),
        ]);

        let candidates = parse_search_results(&xml, BOOK_CLASS).unwrap();
        assert_eq!(
            candidates,
            vec![
                Candidate::new("Dune", "http://dbpedia.org/resource/Dune_B"),
                Candidate::new("Dune Messiah", "http://dbpedia.org/resource/Dune_Messiah"),
            ]
        );
    }

    #[test]
    fn test_class_labels_do_not_shadow_result_label() {
        // The <Class> elements carry their own <Label>/<URI> pairs; only the
        // group-level pair before <Classes> identifies the entity.
        let xml = wrap(&[result_xml(
            "Dune (novel)",
            "http://dbpedia.org/resource/Dune_(novel)",
            &[BOOK_CLASS],
        )]);

        let candidates = parse_search_results(&xml, BOOK_CLASS).unwrap();
        assert_eq!(candidates[0].label, "Dune (novel)");
        assert_eq!(candidates[0].uri, "http://dbpedia.org/resource/Dune_(novel)");
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let xml = b"<ArrayOfResult><Result><Label>Broken";
        // A truncated document must never produce a candidate
        match parse_search_results(xml, BOOK_CLASS) {
            Err(LookupError::SearchParse(_)) => {}
            Ok(candidates) => assert!(candidates.is_empty()),
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_empty_response_yields_no_candidates() {
        let candidates = parse_search_results(b"<ArrayOfResult/>", BOOK_CLASS).unwrap();
        assert!(candidates.is_empty());
    }
}
