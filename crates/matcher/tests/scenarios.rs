//! End-to-end checks from raw source text through tokenization, comparison
//! and aggregation.

use canonical::{tokenize, Language};
use matcher::{aggregate, compare, CompareConfig, CompareError, TokenizedFile};

fn source(id: &str, language: Language, src: &str) -> TokenizedFile {
    TokenizedFile::new(id, language, tokenize(src, language))
}

fn python(id: &str, src: &str) -> TokenizedFile {
    source(id, Language::Python, src)
}

#[test]
fn reindented_copy_is_fully_similar() -> Result<(), CompareError> {
    let a = python(
        "a.py",
        "def f(x):\n    if x:\n        return 1\n    return 0\n",
    );
    let b = python(
        "b.py",
        "def f(x):\n  if x:\n    return 1 # one\n  return 0\n",
    );
    let results = compare(&[a, b], &CompareConfig::default())?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].cosine, 1.0);
    assert_eq!(results[0].jaccard, 1.0);
    assert_eq!(results[0].levenshtein, 1.0);
    Ok(())
}

#[test]
fn string_contents_do_not_lower_similarity() -> Result<(), CompareError> {
    let a = python("a.py", "print(\"hello\")");
    let b = python("b.py", "print('goodbye, world')");
    let results = compare(&[a, b], &CompareConfig::default())?;
    assert_eq!(results[0].max_score(), 1.0);
    Ok(())
}

#[test]
fn pair_count_and_statistics_for_many_files() -> Result<(), CompareError> {
    let files: Vec<TokenizedFile> = (0..6)
        .map(|i| python(&format!("f{i}.py"), &format!("value = {i}\nprint(value)")))
        .collect();
    let results = compare(&files, &CompareConfig::default())?;
    assert_eq!(results.len(), 15);

    let stats = aggregate(&results).expect("non-empty results");
    assert_eq!(stats.total_pairs, 15);
    for (key, value) in stats.entries() {
        if key != "total_pairs" {
            assert!((0.0..=1.0).contains(&value), "{key} = {value}");
        }
    }
    Ok(())
}

#[test]
fn every_score_stays_in_unit_range() -> Result<(), CompareError> {
    let files = vec![
        python("a.py", "import os\nfor f in os.listdir('.'):\n    print(f)"),
        source(
            "b.js",
            Language::JavaScript,
            "const x = [1, 2, 3].map(n => n * 2); // doubled",
        ),
        source("c.c", Language::C, "int main(void) { return 0; }"),
    ];
    for result in compare(&files, &CompareConfig::default())? {
        for score in [result.cosine, result.jaccard, result.levenshtein] {
            assert!((0.0..=1.0).contains(&score));
        }
    }
    Ok(())
}
