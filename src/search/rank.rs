//! Scoring declarations against a normalized query and ordering the results.

use super::scoring::levenshtein;
use crate::decl::Declaration;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One ranked declaration: its located display form and edit distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub id: String,
    pub score: usize,
}

/// Scores every declaration, in input order.
pub fn score_all<D: Declaration>(declarations: &[D], normalized_query: &str) -> Vec<Score> {
    declarations
        .iter()
        .map(|decl| Score {
            id: decl.full_display_form(),
            score: levenshtein(&decl.normal_form(), normalized_query),
        })
        .collect()
}

/// The `limit` closest declarations, closest first.
///
/// The sort is stable: declarations at the same distance stay in extraction
/// order, which makes `rank(.., k)` a prefix of `rank(.., k + 1)`.
pub fn rank<D: Declaration>(
    declarations: &[D],
    normalized_query: &str,
    limit: usize,
) -> Vec<Score> {
    let start = Instant::now();

    let mut scores = score_all(declarations, normalized_query);
    scores.sort_by_key(|entry| entry.score);
    scores.truncate(limit);

    tracing::debug!(
        "Scored {} declarations, kept {} in {:?}",
        declarations.len(),
        scores.len(),
        start.elapsed()
    );

    scores
}

/// The closest declaration, or `None` when there is nothing to choose from.
///
/// Ties go to the earliest declaration, matching the head of [`rank`].
pub fn best_match<D: Declaration>(declarations: &[D], normalized_query: &str) -> Option<Score> {
    let (decl, score) = declarations
        .iter()
        .map(|decl| (decl, levenshtein(&decl.normal_form(), normalized_query)))
        .min_by_key(|&(_, score)| score)?;

    Some(Score {
        id: decl.full_display_form(),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{Function, SourceLoc, Struct, Typedef};
    use crate::search::normalize_query;
    use assert2::{check, let_assert};
    use rstest::{fixture, rstest};

    fn loc(line: u32) -> SourceLoc {
        SourceLoc::new("api.h", line, 1)
    }

    #[fixture]
    fn functions() -> Vec<Function> {
        vec![
            Function::new(loc(1), "int", "parse").with_arg("s", "char *"),
            Function::new(loc(2), "int", "count")
                .with_arg("s", "char *")
                .with_arg("n", "int"),
            Function::new(loc(3), "void", "reset"),
            Function::new(loc(4), "int", "abs").with_arg("x", "int"),
        ]
    }

    #[rstest]
    fn test_exact_signature_ranks_first(functions: Vec<Function>) {
        let scores = rank(&functions, &normalize_query("int(char*, int)"), 10);
        check!(scores[0].id == "api.h:2:1: count :: int ( char * , int ) ");
        check!(scores[0].score == 0);
        check!(scores.len() == functions.len());
        check!(scores.windows(2).all(|pair| pair[0].score <= pair[1].score));
    }

    #[rstest]
    fn test_limit_truncates(functions: Vec<Function>) {
        let query = normalize_query("int(int)");
        check!(rank(&functions, &query, 2).len() == 2);
        check!(rank(&functions, &query, 0).is_empty());
        check!(rank(&functions, &query, 100).len() == 4);
    }

    #[rstest]
    fn test_top_k_is_prefix_of_top_k_plus_one(functions: Vec<Function>) {
        let query = normalize_query("int(char*)");
        for k in 0..functions.len() {
            let shorter = rank(&functions, &query, k);
            let longer = rank(&functions, &query, k + 1);
            check!(shorter[..] == longer[..k]);
        }
    }

    #[test]
    fn test_ties_keep_extraction_order() {
        // Same name length, same distance to the query.
        let structs = vec![Struct::new(loc(7), "beta"), Struct::new(loc(3), "gama")];
        let scores = rank(&structs, "zzzz", 10);
        check!(scores[0].score == scores[1].score);
        check!(scores[0].id.starts_with("api.h:7:1: beta"));
        check!(scores[1].id.starts_with("api.h:3:1: gama"));
    }

    #[test]
    fn test_empty_query_prefers_shortest_normal_form() {
        let typedefs = vec![
            Typedef::new(loc(1), "uint32", "unsigned int"),
            Typedef::new(loc(2), "u8", "unsigned char"),
        ];
        let scores = rank(&typedefs, &normalize_query(""), 10);
        check!(scores[0].id == "api.h:2:1: u8 :: unsigned char");
        check!(scores[0].score == 2);
        check!(scores[1].score == 6);
    }

    #[test]
    fn test_empty_input() {
        let none: Vec<Function> = Vec::new();
        check!(rank(&none, "int ( ) ", 10).is_empty());
        check!(best_match(&none, "int ( ) ").is_none());
    }

    #[rstest]
    fn test_best_match_is_head_of_ranking(functions: Vec<Function>) {
        for raw in ["int(int)", "void()", "", "int (char *)", "zzz"] {
            let query = normalize_query(raw);
            let_assert!(Some(best) = best_match(&functions, &query));
            check!(best == rank(&functions, &query, 1)[0]);
        }
    }
}
