//! Edit distance between a declaration's normal form and a query.

/// Levenshtein distance over bytes with unit cost insert, delete and
/// substitute.
///
/// Keeps two rolling rows sized by the shorter input, so memory is
/// `O(min(|a|, |b|))`. Swapping the inputs never changes the result.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (long, short) = if a.len() >= b.len() {
        (a.as_bytes(), b.as_bytes())
    } else {
        (b.as_bytes(), a.as_bytes())
    };

    // Row for the empty prefix of `long`: j edits to build short[..j].
    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j]
            } else {
                1 + curr[j].min(prev[j + 1]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rapidfuzz::distance::levenshtein as oracle;
    use rstest::rstest;

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "int",
        "int ( int ) ",
        "int ( char * , int ) ",
        "void (  ) ",
        "kitten",
        "sitting",
        "point",
        "Point",
        "size_t",
        "日本",
    ];

    #[rstest]
    #[case("", "", 0)]
    #[case("abc", "", 3)]
    #[case("", "abc", 3)]
    #[case("kitten", "sitting", 3)]
    #[case("flaw", "lawn", 2)]
    #[case("int(char*,int)", "int(int)", 6)]
    #[case("int ( char * , int ) ", "int ( int ) ", 9)]
    #[case("point", "Point", 1)]
    fn test_known_distances(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        check!(levenshtein(a, b) == expected);
    }

    #[test]
    fn test_counts_bytes_not_chars() {
        // 'é' is two bytes in UTF-8.
        check!(levenshtein("e", "é") == 2);
    }

    #[test]
    fn test_identity() {
        for a in SAMPLES {
            check!(levenshtein(a, a) == 0, "identity failed for {:?}", a);
        }
    }

    #[test]
    fn test_symmetry() {
        for a in SAMPLES {
            for b in SAMPLES {
                check!(levenshtein(a, b) == levenshtein(b, a), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        for a in SAMPLES {
            for b in SAMPLES {
                for c in SAMPLES {
                    check!(levenshtein(a, c) <= levenshtein(a, b) + levenshtein(b, c));
                }
            }
        }
    }

    #[test]
    fn test_agrees_with_reference_implementation() {
        for a in SAMPLES {
            for b in SAMPLES {
                check!(
                    levenshtein(a, b) == oracle::distance(a.bytes(), b.bytes()),
                    "{:?} vs {:?}",
                    a,
                    b
                );
            }
        }
    }
}
