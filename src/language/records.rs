//! 언어 로드에 전달되는 규칙 레코드
//!
//! 외부 로더가 문서를 파싱/검증한 뒤 언어마다 자기 몫의 레코드만 넘겨줍니다.
//! 패턴 문자열의 컴파일은 `LanguageRuleSet::load` 시점에 수행됩니다.

use serde::{Deserialize, Serialize};

use crate::core::{
    Anchor, DecompositionRule, ExceptionRule, Pattern, PatternCache, PatternRule,
    RomanizationProfile,
};
use crate::error::TranscripaError;

/// 빈 문자열은 조건 없음으로 취급
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn compile_optional(
    cache: &mut PatternCache,
    source: &Option<String>,
    anchor: Anchor,
) -> Result<Option<Pattern>, TranscripaError> {
    non_empty(source)
        .map(|s| cache.compile(s, anchor))
        .transpose()
}

/// 예외 규칙 레코드
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExceptionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default)]
    pub replacement: String,
}

impl ExceptionRecord {
    pub fn compile(&self, cache: &mut PatternCache) -> Result<ExceptionRule, TranscripaError> {
        Ok(ExceptionRule::with_patterns(
            compile_optional(cache, &self.original, Anchor::Start)?,
            compile_optional(cache, &self.prefix, Anchor::End)?,
            compile_optional(cache, &self.suffix, Anchor::Start)?,
            self.replacement.clone(),
        ))
    }
}

/// 패턴 규칙 레코드 (전사/음역 공용)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternRuleRecord {
    pub original: String,
    #[serde(default)]
    pub replacement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<ExceptionRecord>,
}

impl PatternRuleRecord {
    /// 조건 없는 규칙 레코드
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
            ..Self::default()
        }
    }

    /// 레코드를 규칙으로 컴파일
    /// 규칙 하나에 잘못된 패턴이 여러 개여도 첫 번째 에러만 반환
    pub fn compile(&self, cache: &mut PatternCache) -> Result<PatternRule, TranscripaError> {
        let main = cache.compile(&self.original, Anchor::Start)?;
        let prefix = compile_optional(cache, &self.prefix, Anchor::End)?;
        let suffix = compile_optional(cache, &self.suffix, Anchor::Start)?;
        let exceptions = self
            .exceptions
            .iter()
            .map(|e| e.compile(cache))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PatternRule::with_patterns(
            main,
            prefix,
            suffix,
            self.replacement.clone(),
            exceptions,
        ))
    }
}

/// 로마자 표기 프로필 레코드
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RomanizationRecord {
    pub name: String,
    #[serde(default)]
    pub transliterations: Vec<PatternRuleRecord>,
}

impl RomanizationRecord {
    /// 프로필 컴파일. 잘못된 규칙은 건너뛰고 에러를 `errors`에 모음
    pub fn compile(
        &self,
        cache: &mut PatternCache,
        errors: &mut Vec<TranscripaError>,
    ) -> RomanizationProfile {
        let rules = compile_all(&self.transliterations, cache, errors);
        RomanizationProfile::new(self.name.clone(), rules)
    }
}

/// 규칙 목록 컴파일. 잘못된 규칙은 건너뛰고 나머지는 순서를 유지
pub fn compile_all(
    records: &[PatternRuleRecord],
    cache: &mut PatternCache,
    errors: &mut Vec<TranscripaError>,
) -> Vec<PatternRule> {
    let mut rules = Vec::with_capacity(records.len());
    for record in records {
        match record.compile(cache) {
            Ok(rule) => rules.push(rule),
            Err(e) => {
                log::warn!("규칙 건너뜀 ('{}'): {}", record.original, e);
                errors.push(e);
            }
        }
    }
    rules
}

/// 언어 하나의 파싱 완료된 규칙 모음
#[derive(Clone, Debug, Default)]
pub struct LanguageRules {
    pub transcriptions: Vec<PatternRuleRecord>,
    pub romanizations: Vec<RomanizationRecord>,
    pub decompositions: Vec<DecompositionRule>,
}

impl LanguageRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.transcriptions.is_empty()
            && self.romanizations.is_empty()
            && self.decompositions.is_empty()
    }
}
