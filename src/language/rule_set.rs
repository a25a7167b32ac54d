//! 언어별 규칙 모음과 변환 파이프라인
//!
//! 분해 → 로마자 표기 → 발음 전사 3단계를 순서대로 실행합니다.
//! 각 단계는 "이미 적용됨" 플래그로 건너뛸 수 있어 중간 결과를 다시 넣어도
//! 같은 단계가 두 번 실행되지 않습니다.

use crate::core::{
    decompose, scan, DecompositionRule, PatternCache, PatternRule, RomanizationProfile,
};
use crate::error::TranscripaError;

use super::records::{compile_all, LanguageRules};

/// 언어 하나의 규칙 모음
#[derive(Debug, Clone)]
pub struct LanguageRuleSet {
    iso_code: String,
    name: String,
    transcriptions: Vec<PatternRule>,
    romanizations: Vec<RomanizationProfile>,
    decompositions: Vec<DecompositionRule>,
    /// 선택된 로마자 표기 프로필 (None = 선택 안 됨)
    profile_index: Option<usize>,
    loaded: bool,
}

impl LanguageRuleSet {
    /// 규칙 없이 생성 (로드 전에는 모든 변환이 항등 변환)
    pub fn new(iso_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            iso_code: iso_code.into(),
            name: name.into(),
            transcriptions: Vec::new(),
            romanizations: Vec::new(),
            decompositions: Vec::new(),
            profile_index: None,
            loaded: false,
        }
    }

    /// 파싱된 규칙 레코드로 규칙 모음을 채움
    ///
    /// 이미 로드된 경우 아무것도 하지 않습니다. 컴파일할 수 없는 규칙은 건너뛰고
    /// 해당 에러를 모두 모아 반환합니다.
    pub fn load(&mut self, rules: LanguageRules) -> Vec<TranscripaError> {
        if self.loaded {
            log::debug!("[{}] 이미 로드됨, 건너뜀", self.name);
            return Vec::new();
        }

        let mut errors = Vec::new();
        let mut cache = PatternCache::new();

        self.transcriptions = compile_all(&rules.transcriptions, &mut cache, &mut errors);
        self.romanizations = rules
            .romanizations
            .iter()
            .map(|r| r.compile(&mut cache, &mut errors))
            .collect();
        self.decompositions = rules.decompositions;
        self.loaded = true;

        log::debug!(
            "[{}] 로드 완료: 전사 규칙 {}개, 로마자 프로필 {}개, 분해 공식 {}개, 패턴 {}개, 에러 {}개",
            self.name,
            self.transcriptions.len(),
            self.romanizations.len(),
            self.decompositions.len(),
            cache.len(),
            errors.len()
        );

        errors
    }

    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn transcriptions(&self) -> &[PatternRule] {
        &self.transcriptions
    }

    pub fn romanizations(&self) -> &[RomanizationProfile] {
        &self.romanizations
    }

    pub fn decompositions(&self) -> &[DecompositionRule] {
        &self.decompositions
    }

    /// 로마자 표기 프로필 이름 목록 (선언 순서)
    pub fn profile_names(&self) -> Vec<String> {
        self.romanizations
            .iter()
            .map(|r| r.name().to_string())
            .collect()
    }

    /// 인덱스로 프로필 선택
    /// 범위를 벗어나면 에러를 반환하고 현재 선택은 유지
    pub fn select_profile(&mut self, index: usize) -> Result<(), TranscripaError> {
        if index >= self.romanizations.len() {
            return Err(TranscripaError::ProfileIndexOutOfRange {
                index,
                len: self.romanizations.len(),
            });
        }
        self.profile_index = Some(index);
        Ok(())
    }

    /// 이름으로 프로필 선택 (같은 이름이 여러 개면 첫 번째)
    pub fn select_profile_by_name(&mut self, name: &str) -> Result<(), TranscripaError> {
        let index = self
            .romanizations
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| TranscripaError::UnknownProfile(name.to_string()))?;
        self.profile_index = Some(index);
        Ok(())
    }

    /// 프로필 선택 해제 (로마자 표기가 항등 변환이 됨)
    pub fn clear_profile(&mut self) {
        self.profile_index = None;
    }

    pub fn current_profile_index(&self) -> Option<usize> {
        self.profile_index
    }

    pub fn current_profile(&self) -> Option<&RomanizationProfile> {
        self.profile_index.and_then(|i| self.romanizations.get(i))
    }

    pub fn current_profile_name(&self) -> Option<&str> {
        self.current_profile().map(|p| p.name())
    }

    /// 문자 분해 (분해 공식이 없으면 항등 변환)
    pub fn decompose(&self, text: &str) -> String {
        decompose(text, &self.decompositions)
    }

    /// 로마자 표기
    /// - already_decomposed: 입력이 이미 분해된 경우 true
    pub fn romanize(&self, text: &str, already_decomposed: bool) -> String {
        let decomposed = if already_decomposed {
            text.to_string()
        } else {
            self.decompose(text)
        };

        match self.current_profile() {
            Some(profile) => profile.romanize(&decomposed),
            None => decomposed,
        }
    }

    /// 발음 전사
    /// - already_decomposed: 입력이 이미 분해된 경우 true
    /// - already_romanized: 입력이 이미 로마자로 표기된 경우 true
    pub fn transcribe(
        &self,
        text: &str,
        already_decomposed: bool,
        already_romanized: bool,
    ) -> String {
        let romanized = if already_romanized {
            if already_decomposed {
                text.to_string()
            } else {
                self.decompose(text)
            }
        } else {
            self.romanize(text, already_decomposed)
        };

        scan(&romanized, &self.transcriptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::records::{PatternRuleRecord, RomanizationRecord};

    fn sample_rules() -> LanguageRules {
        LanguageRules {
            transcriptions: vec![
                PatternRuleRecord::new("a", "ɑ"),
                PatternRuleRecord::new("x", "ks"),
            ],
            romanizations: vec![
                RomanizationRecord {
                    name: "Upper".into(),
                    transliterations: vec![PatternRuleRecord::new("á", "A")],
                },
                RomanizationRecord {
                    name: "Lower".into(),
                    transliterations: vec![PatternRuleRecord::new("á", "a")],
                },
            ],
            // 'Z' -> 'x'
            decompositions: vec![DecompositionRule::new(0x78 - 0x5A, 1, 1, 0, 0, 0x5A, 0x5A)],
        }
    }

    fn loaded() -> LanguageRuleSet {
        let mut set = LanguageRuleSet::new("tst", "Test");
        assert!(set.load(sample_rules()).is_empty());
        set
    }

    #[test]
    fn test_unloaded_is_identity() {
        let set = LanguageRuleSet::new("tst", "Test");
        assert!(!set.is_loaded());
        assert_eq!(set.decompose("Zá"), "Zá");
        assert_eq!(set.romanize("Zá", false), "Zá");
        assert_eq!(set.transcribe("Zá", false, false), "Zá");
    }

    #[test]
    fn test_romanize_without_profile_is_identity() {
        let set = loaded();
        assert_eq!(set.current_profile_index(), None);
        assert_eq!(set.romanize("Zá", true), "Zá");
        // 분해는 여전히 적용
        assert_eq!(set.romanize("Zá", false), "xá");
    }

    #[test]
    fn test_select_profile() {
        let mut set = loaded();
        assert_eq!(set.profile_names(), vec!["Upper", "Lower"]);

        set.select_profile(1).unwrap();
        assert_eq!(set.current_profile_name(), Some("Lower"));
        assert_eq!(set.romanize("á", true), "a");

        set.select_profile_by_name("Upper").unwrap();
        assert_eq!(set.current_profile_index(), Some(0));
        assert_eq!(set.romanize("á", true), "A");

        set.clear_profile();
        assert_eq!(set.romanize("á", true), "á");
    }

    #[test]
    fn test_select_profile_out_of_range_keeps_selection() {
        let mut set = loaded();
        set.select_profile(1).unwrap();
        let result = set.select_profile(5);
        assert!(matches!(
            result,
            Err(TranscripaError::ProfileIndexOutOfRange { index: 5, len: 2 })
        ));
        assert_eq!(set.current_profile_index(), Some(1));
        assert!(matches!(
            set.select_profile_by_name("Nope"),
            Err(TranscripaError::UnknownProfile(_))
        ));
        assert_eq!(set.current_profile_index(), Some(1));
    }

    #[test]
    fn test_transcribe_flags() {
        let mut set = loaded();
        set.select_profile(1).unwrap();

        // 분해(Z->x) -> 로마자(á->a) -> 전사(a->ɑ, x->ks)
        assert_eq!(set.transcribe("Zá", false, false), "ksɑ");
        // 이미 분해됨: Z는 그대로
        assert_eq!(set.transcribe("Zá", true, false), "Zɑ");
        // 이미 로마자 표기됨: á는 그대로
        assert_eq!(set.transcribe("Zá", false, true), "ksá");
        assert_eq!(set.transcribe("Zá", true, true), "Zá");
    }

    #[test]
    fn test_canonical_single_pass() {
        let mut set = loaded();
        set.select_profile(0).unwrap();
        let romanized = set.romanize("Zá", false);
        assert_eq!(romanized, "xA");
        assert_eq!(set.transcribe(&romanized, true, true), "ksɑ");
    }

    #[test]
    fn test_load_is_idempotent() {
        let mut set = loaded();
        let transcriptions = set.transcriptions().len();
        let profiles = set.profile_names();
        let decompositions = set.decompositions().to_vec();

        let mut extra = sample_rules();
        extra.transcriptions.push(PatternRuleRecord::new("b", "β"));
        assert!(set.load(extra).is_empty());

        assert_eq!(set.transcriptions().len(), transcriptions);
        assert_eq!(set.profile_names(), profiles);
        assert_eq!(set.decompositions(), decompositions.as_slice());
    }

    #[test]
    fn test_load_collects_errors_and_keeps_good_rules() {
        let mut rules = sample_rules();
        rules.transcriptions.insert(1, PatternRuleRecord::new("(", "?"));
        rules.romanizations[0]
            .transliterations
            .push(PatternRuleRecord::new("[", "?"));

        let mut set = LanguageRuleSet::new("tst", "Test");
        let errors = set.load(rules);

        assert_eq!(errors.len(), 2);
        assert!(set.is_loaded());
        assert_eq!(set.transcriptions().len(), 2);
        assert_eq!(set.romanizations()[0].rules().len(), 1);
    }
}
