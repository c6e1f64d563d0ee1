//! Corpus tests across every supported language directory

use fixture_corpus::{Check, CheckOptions, Corpus, Lang, LoadOptions, Validator};

use crate::common::samples::{BROKEN_GO, BROKEN_PYTHON, VALID_SAMPLES};
use crate::common::TestCorpus;

#[test]
fn test_every_language_directory_is_recognized() {
    let tc = TestCorpus::new();
    tc.with_all_languages();

    let corpus = Corpus::open(tc.root()).unwrap();
    assert_eq!(corpus.languages().collect::<Vec<_>>(), Lang::ALL.to_vec());
    assert_eq!(corpus.len(), VALID_SAMPLES.len());
    assert!(corpus.unknown_dirs().is_empty());

    for lang in Lang::ALL {
        let fixtures = corpus.fixtures(lang);
        assert_eq!(fixtures.len(), 1, "expected one fixture for {}", lang);
        assert_eq!(fixtures[0].extension_lang(), Some(lang));
    }
}

#[test]
fn test_every_valid_sample_passes() {
    let tc = TestCorpus::new();
    tc.with_all_languages();

    let corpus = Corpus::open(tc.root()).unwrap();
    let report = Validator::default().run(&corpus).unwrap();
    assert!(report.is_ok(), "{:#?}", report.issues);
    assert_eq!(report.files_checked, Lang::ALL.len());
    assert_eq!(report.languages.len(), Lang::ALL.len());
}

#[test]
fn test_broken_samples_in_several_languages() {
    let tc = TestCorpus::new();
    tc.add_fixture("python/valid.py", BROKEN_PYTHON)
        .add_fixture("go/valid.go", BROKEN_GO)
        .add_fixture("go/invalid.go", BROKEN_GO);

    let corpus = Corpus::open(tc.root()).unwrap();
    let report = Validator::default().run(&corpus).unwrap();

    let mut failing: Vec<String> = report
        .issues
        .iter()
        .filter(|i| i.check == Check::UnexpectedSyntaxErrors)
        .map(|i| i.path.replace('\\', "/"))
        .collect();
    failing.sort();
    assert_eq!(failing, vec!["go/valid.go", "python/valid.py"]);
    assert_eq!(report.error_count(), 2);
}

#[test]
fn test_wrong_language_directory() {
    let tc = TestCorpus::new();
    tc.add_fixture("ruby/valid.py", "def add(a, b):\n    return a + b\n");

    let corpus = Corpus::open(tc.root()).unwrap();
    let fixture = corpus.fixtures(Lang::Ruby).first().unwrap();
    assert_eq!(fixture.lang(), Lang::Ruby);
    assert_eq!(fixture.extension_lang(), Some(Lang::Python));

    let report = Validator::new(CheckOptions {
        syntax: false,
        ..CheckOptions::default()
    })
    .run(&corpus)
    .unwrap();
    assert_eq!(
        report.issues.iter().map(|i| i.check).collect::<Vec<_>>(),
        vec![Check::ExtensionMismatch]
    );
}

#[test]
fn test_unknown_directories_are_not_loaded() {
    let tc = TestCorpus::new();
    tc.with_all_languages()
        .add_fixture("haskell/valid.hs", "main = putStrLn \"hi\"\n")
        .add_fixture("c++/valid.cpp", "int main() { return 0; }\n");

    let corpus = Corpus::open(tc.root()).unwrap();
    assert_eq!(corpus.unknown_dirs().len(), 2);
    assert_eq!(corpus.len(), VALID_SAMPLES.len());

    let mut options = LoadOptions::default();
    options.aliases.insert("c++".to_string(), Lang::Cpp);
    let aliased = Corpus::open_with(tc.root(), &options).unwrap();
    assert_eq!(aliased.unknown_dirs().len(), 1);
    assert_eq!(aliased.fixtures(Lang::Cpp).len(), 2);
}
