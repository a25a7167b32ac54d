//! 통합 테스트 - 기본 규칙 문서(data/languages.json)로 전체 파이프라인 검증

use transcripa::core::{scan, PatternRule};
use transcripa::{LanguageRegistry, RuleLoader, TranscripaError};

const LANGUAGES_JSON: &str = include_str!("../data/languages.json");

fn registry_with(language: &str, profile: usize) -> LanguageRegistry {
    let mut loaded = RuleLoader::new(true).load_json(LANGUAGES_JSON).unwrap();
    assert!(loaded.errors.is_empty());
    assert!(loaded.registry.load(language).unwrap().is_empty());
    loaded
        .registry
        .current_mut()
        .unwrap()
        .select_profile(profile)
        .unwrap();
    loaded.registry
}

fn romanize(registry: &LanguageRegistry, text: &str) -> String {
    registry.current().unwrap().romanize(text, false)
}

fn transcribe(registry: &LanguageRegistry, text: &str) -> String {
    let set = registry.current().unwrap();
    let romanized = set.romanize(text, false);
    set.transcribe(&romanized, true, true)
}

#[test]
fn test_language_list() {
    let loaded = RuleLoader::default().load_json(LANGUAGES_JSON).unwrap();
    assert_eq!(loaded.registry.list_names(), vec!["Korean", "Russian"]);
    assert_eq!(loaded.registry.get("Korean").unwrap().iso_code(), "kor");
    assert!(!loaded.registry.get("Korean").unwrap().is_loaded());
}

#[test]
fn test_korean_profiles() {
    let registry = registry_with("Korean", 0);
    assert_eq!(
        registry.current().unwrap().profile_names(),
        vec!["Revised Romanization", "McCune-Reischauer"]
    );
}

#[test]
fn test_hangul_decomposition() {
    let registry = registry_with("Korean", 0);
    let set = registry.current().unwrap();
    // 한 = ᄒ ᅡ ᆫ, 가 = ᄀ ᅡ + 종성 없음
    assert_eq!(set.decompose("한"), "\u{1112}\u{1161}\u{11AB}");
    assert_eq!(set.decompose("가"), "\u{1100}\u{1161}\u{11A7}");
    assert_eq!(set.decompose("abc"), "abc");
}

#[test]
fn test_revised_romanization() {
    let registry = registry_with("Korean", 0);
    assert_eq!(romanize(&registry, "한글"), "hangeul");
    assert_eq!(romanize(&registry, "안녕"), "annyeong");
    assert_eq!(romanize(&registry, "가"), "ga");
    assert_eq!(romanize(&registry, "김치"), "gimchi");
    assert_eq!(romanize(&registry, "한글 학교"), "hangeul hakgyo");
}

#[test]
fn test_final_consonant_liaison_exception() {
    // 종성 ㄱ 다음에 ㅇ이 오면 k 대신 g
    let registry = registry_with("Korean", 0);
    assert_eq!(romanize(&registry, "한국어"), "hangugeo");
    assert_eq!(romanize(&registry, "한국"), "hanguk");
}

#[test]
fn test_mccune_reischauer() {
    let registry = registry_with("Korean", 1);
    assert_eq!(romanize(&registry, "한글"), "hang\u{16D}l");
    assert_eq!(romanize(&registry, "김치"), "kimch'i");
    assert_eq!(romanize(&registry, "부산"), "pusan");
    assert_eq!(romanize(&registry, "시"), "shi");
}

#[test]
fn test_korean_ipa() {
    let registry = registry_with("Korean", 0);
    assert_eq!(transcribe(&registry, "한글"), "han\u{261}\u{26F}l");
    // 문자열 끝의 ng는 경계 문자 덕분에 ŋ
    assert_eq!(transcribe(&registry, "안녕"), "annj\u{28C}\u{14B}");
    assert_eq!(transcribe(&registry, "김치"), "kimt\u{361}\u{255}\u{2B0}i");
    assert_eq!(
        transcribe(&registry, "한글 학교"),
        "han\u{261}\u{26F}l hak\u{31A}kjo"
    );
}

#[test]
fn test_transcribe_from_raw_matches_single_pass() {
    let registry = registry_with("Korean", 0);
    let set = registry.current().unwrap();
    for word in ["한글", "안녕", "한국어", "김치"] {
        let single_pass = set.transcribe(&set.romanize(word, false), true, true);
        assert_eq!(set.transcribe(word, false, false), single_pass);
    }
}

#[test]
fn test_russian_without_decomposition() {
    let registry = registry_with("Russian", 0);
    assert_eq!(romanize(&registry, "жук"), "\u{17E}uk");
    assert_eq!(transcribe(&registry, "жук"), "\u{290}uk");
    // 대소문자 구분 없음
    assert_eq!(romanize(&registry, "Москва"), "moskva");
    assert_eq!(transcribe(&registry, "Москва"), "m\u{250}skva");
    // 긴 규칙(щ -> šč)이 전사에서 먼저 선언된 규칙으로 처리됨
    assert_eq!(transcribe(&registry, "щи"), "\u{255}\u{2D0}i");
}

#[test]
fn test_profile_out_of_range() {
    let mut registry = registry_with("Korean", 1);
    let set = registry.current_mut().unwrap();
    assert!(matches!(
        set.select_profile(5),
        Err(TranscripaError::ProfileIndexOutOfRange { index: 5, len: 2 })
    ));
    assert_eq!(set.current_profile_index(), Some(1));
}

#[test]
fn test_reload_is_noop() {
    let mut registry = registry_with("Korean", 0);
    let before = registry.get("Korean").unwrap().transcriptions().len();
    assert!(registry.load("Korean").unwrap().is_empty());
    let after = registry.get("Korean").unwrap().transcriptions().len();
    assert_eq!(before, after);
    // 다시 로드해도 프로필 선택은 유지
    assert_eq!(registry.current().unwrap().current_profile_index(), Some(0));
}

#[test]
fn test_unknown_language() {
    let mut loaded = RuleLoader::default().load_json(LANGUAGES_JSON).unwrap();
    assert!(matches!(
        loaded.registry.load("Klingon"),
        Err(TranscripaError::UnknownLanguage(_))
    ));
}

#[test]
fn test_banana() {
    let rule = PatternRule::new("a", "X").unwrap();
    assert_eq!(scan("banana", &[rule]), "bXnXnX");
}

#[test]
fn test_first_match_priority() {
    let rules = [
        PatternRule::new("n", "N").unwrap().with_prefix("a").unwrap(),
        PatternRule::new("n", "n").unwrap(),
    ];
    assert_eq!(scan("an", &rules), "aN");
    assert_eq!(scan("bn", &rules), "bn");
}
