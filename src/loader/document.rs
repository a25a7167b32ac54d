//! 규칙 문서 (JSON) 구조
//!
//! # 파일 형식
//! ```json
//! {
//!   "languages": [
//!     {
//!       "iso": "kor",
//!       "name": "Korean",
//!       "decompositions": [
//!         { "offset": -44032, "modulus": 1, "divisor": 588, "intercept": 4352,
//!           "order": 0, "range_min": 44032, "range_max": 55203,
//!           "prev_factors": [ { "index": 0, "multiply_by": -588 } ] }
//!       ],
//!       "romanizations": [
//!         { "name": "Revised Romanization",
//!           "transliterations": [ { "original": "ᄀ", "replacement": "g" } ] }
//!       ],
//!       "transcriptions": [
//!         { "original": "ng", "replacement": "ŋ", "suffix": "[^aeiou]",
//!           "exceptions": [ { "prefix": "o", "replacement": "ŋ" } ] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::core::DecompositionRule;
use crate::error::TranscripaError;
use crate::language::{PatternRuleRecord, RomanizationRecord};

/// 규칙 문서 전체
#[derive(Deserialize, Debug, Default)]
pub struct RuleDocument {
    #[serde(default)]
    pub languages: Vec<LanguageDocument>,
}

/// 언어 하나의 규칙 정의
#[derive(Deserialize, Debug)]
pub struct LanguageDocument {
    pub iso: String,
    pub name: String,
    #[serde(default)]
    pub transcriptions: Vec<PatternRuleRecord>,
    #[serde(default)]
    pub romanizations: Vec<RomanizationRecord>,
    #[serde(default)]
    pub decompositions: Vec<DecompositionRecord>,
}

/// 숫자 필드: JSON 정수 또는 정수 문자열
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum NumericField {
    Integer(i64),
    Text(String),
    Other(serde_json::Value),
}

impl NumericField {
    fn parse(&self) -> Option<i64> {
        match self {
            NumericField::Integer(n) => Some(*n),
            NumericField::Text(s) => s.trim().parse().ok(),
            NumericField::Other(_) => None,
        }
    }

    fn raw(&self) -> String {
        match self {
            NumericField::Integer(n) => n.to_string(),
            NumericField::Text(s) => s.clone(),
            NumericField::Other(v) => v.to_string(),
        }
    }
}

/// 이전 결과 계수
#[derive(Deserialize, Debug, Clone)]
pub struct PrevFactorRecord {
    pub index: Option<NumericField>,
    pub multiply_by: Option<NumericField>,
}

/// 분해 공식 (검증 전)
#[derive(Deserialize, Debug, Clone)]
pub struct DecompositionRecord {
    pub offset: Option<NumericField>,
    pub modulus: Option<NumericField>,
    pub divisor: Option<NumericField>,
    pub intercept: Option<NumericField>,
    pub order: Option<NumericField>,
    pub range_min: Option<NumericField>,
    pub range_max: Option<NumericField>,
    #[serde(default)]
    pub prev_factors: Vec<PrevFactorRecord>,
}

/// 필수 숫자 필드 파싱
fn required(
    language: &str,
    field: &str,
    value: &Option<NumericField>,
) -> Result<i64, TranscripaError> {
    let malformed = |raw: String| TranscripaError::MalformedNumericField {
        language: language.to_string(),
        field: field.to_string(),
        value: raw,
    };
    let value = value.as_ref().ok_or_else(|| malformed(String::new()))?;
    value.parse().ok_or_else(|| malformed(value.raw()))
}

/// 0이 아닌 숫자 필드 파싱 (나눗셈/나머지 연산에 사용)
fn non_zero(
    language: &str,
    field: &str,
    value: &Option<NumericField>,
) -> Result<i64, TranscripaError> {
    match required(language, field, value)? {
        0 => Err(TranscripaError::MalformedNumericField {
            language: language.to_string(),
            field: field.to_string(),
            value: "0".into(),
        }),
        n => Ok(n),
    }
}

impl DecompositionRecord {
    /// 검증 후 분해 공식으로 변환
    pub fn to_rule(&self, language: &str) -> Result<DecompositionRule, TranscripaError> {
        let mut rule = DecompositionRule::new(
            required(language, "offset", &self.offset)?,
            non_zero(language, "modulus", &self.modulus)?,
            non_zero(language, "divisor", &self.divisor)?,
            required(language, "intercept", &self.intercept)?,
            required(language, "order", &self.order)?,
            required(language, "range_min", &self.range_min)?,
            required(language, "range_max", &self.range_max)?,
        );

        for factor in &self.prev_factors {
            let index = required(language, "prev_factors.index", &factor.index)?;
            let index = usize::try_from(index).map_err(|_| {
                TranscripaError::MalformedNumericField {
                    language: language.to_string(),
                    field: "prev_factors.index".into(),
                    value: index.to_string(),
                }
            })?;
            let multiply_by = required(language, "prev_factors.multiply_by", &factor.multiply_by)?;
            rule = rule.with_prev_factor(index, multiply_by);
        }

        Ok(rule)
    }
}
