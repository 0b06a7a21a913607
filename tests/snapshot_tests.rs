// Integration tests for the build / export / rehydrate cycle.

mod common;

use common::{ids, sample_words, SuffixMorphology};
use lexicon_core::persistence::{load_snapshot, save_snapshot};
use lexicon_core::{
    Dictionary, DictionaryError, Flavorisation, IndexSnapshot, Lang, Morphology, ScriptConverter,
    SearchRequest, SearchType,
};

const QUERIES: [&str; 12] = [
    "d",
    "do",
    "dom",
    "domu",
    "za",
    "ža",
    "mlěko -etym",
    "dom -b",
    "ava -end",
    "do -p noun",
    "вода",
    "water",
];

fn requests() -> Vec<SearchRequest> {
    let directions = [
        (Lang::Isv, Lang::En),
        (Lang::En, Lang::Isv),
        (Lang::Sr, Lang::Isv),
        (Lang::Isv, Lang::Ru),
    ];
    let mut requests = Vec::new();
    for query in QUERIES {
        for (from, to) in directions {
            for search_type in [SearchType::Begin, SearchType::Contains] {
                for style in [Flavorisation::Standard, Flavorisation::Etymological] {
                    requests.push(
                        SearchRequest::new(query, from, to)
                            .with_search_type(search_type)
                            .with_flavorisation(style),
                    );
                }
            }
        }
    }
    requests
}

fn built() -> Dictionary<SuffixMorphology, ScriptConverter> {
    let mut dictionary = Dictionary::with_providers(SuffixMorphology, ScriptConverter::new());
    dictionary.build(sample_words(), None).unwrap();
    dictionary
}

fn assert_same_results<A, B>(
    left: &Dictionary<A, ScriptConverter>,
    right: &Dictionary<B, ScriptConverter>,
) where
    A: Morphology,
    B: Morphology,
{
    for request in requests() {
        let expected = ids(&left.search(&request).unwrap());
        let actual = ids(&right.search(&request).unwrap());
        assert_eq!(expected, actual, "request {:?}", request);
    }
}

fn rehydrated(snapshot: IndexSnapshot) -> Dictionary {
    // no morphology: inflected forms must come from the snapshot
    let mut dictionary = Dictionary::new();
    dictionary.build(sample_words(), Some(snapshot)).unwrap();
    dictionary
}

#[test]
fn test_rehydrated_index_answers_identically() {
    let original = built();
    let snapshot = IndexSnapshot {
        index: original.get_index().unwrap(),
        completion: original.completion_statistics().unwrap().clone(),
    };
    let copy = rehydrated(snapshot);

    assert_same_results(&original, &copy);
    assert_eq!(original.get_index().unwrap(), copy.get_index().unwrap());
    assert_eq!(
        original.completion_statistics().unwrap(),
        copy.completion_statistics().unwrap()
    );
}

#[test]
fn test_folding_applies_to_rehydrated_index() {
    let mut original = built();
    let mut copy = rehydrated(original.snapshot().unwrap());
    original.toggle_folding_letter("žě");
    copy.set_folding_configuration(original.folding().clone());
    assert_same_results(&original, &copy);
}

#[test]
fn test_snapshot_survives_encodings() {
    let original = built();
    let snapshot = original.snapshot().unwrap();

    let from_json = IndexSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    assert_same_results(&original, &rehydrated(from_json));

    let from_bytes = IndexSnapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();
    assert_same_results(&original, &rehydrated(from_bytes));
}

#[test]
fn test_snapshot_file_round_trip() {
    let original = built();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.bin");

    save_snapshot(&original.snapshot().unwrap(), &path).unwrap();
    let loaded = load_snapshot(&path).unwrap();
    assert_same_results(&original, &rehydrated(loaded));
}

#[test]
fn test_snapshot_with_bad_key_is_rejected() {
    let snapshot = IndexSnapshot {
        index: vec![("1-klingon".to_string(), vec!["x".to_string()])],
        ..IndexSnapshot::default()
    };
    let mut dictionary = Dictionary::new();
    let result = dictionary.build(sample_words(), Some(snapshot));
    assert!(matches!(result, Err(DictionaryError::InvalidSnapshotKey(_))));
    assert!(!dictionary.is_built());
}

#[test]
fn test_word_list_is_kept() {
    let original = built();
    assert_eq!(original.word_list().unwrap(), sample_words().as_slice());
}
