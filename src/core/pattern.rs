//! 패턴 규칙 매칭
//!
//! 규칙 하나(주 패턴 + 앞/뒤 문맥 + 예외 목록)를 문자열의 특정 위치에 적용합니다.
//! 모든 패턴은 대소문자를 구분하지 않으며 기준 위치에 고정되어 매칭됩니다.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::error::TranscripaError;

/// 패턴을 고정할 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// 대상 문자열의 시작에 고정 (주 패턴, 뒤 문맥)
    Start,
    /// 대상 문자열의 끝에 고정 (앞 문맥)
    End,
}

impl Anchor {
    fn wrap(self, source: &str) -> String {
        match self {
            Anchor::Start => format!("^(?:{})", source),
            Anchor::End => format!("(?:{})$", source),
        }
    }
}

/// 컴파일된 패턴
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    anchor: Anchor,
    regex: Regex,
}

impl Pattern {
    /// 패턴 문자열을 컴파일
    pub fn compile(source: &str, anchor: Anchor) -> Result<Self, TranscripaError> {
        let regex = RegexBuilder::new(&anchor.wrap(source))
            .case_insensitive(true)
            .build()
            .map_err(|e| TranscripaError::PatternCompile {
                pattern: source.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            source: source.to_string(),
            anchor,
            regex,
        })
    }

    /// 원본 패턴 문자열 (고정 래핑 이전)
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// 패턴이 조건을 만족하는지 확인
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// 시작 고정 매칭의 길이 (바이트)
    /// 빈 매칭은 매칭 실패로 취급
    pub fn match_len(&self, text: &str) -> Option<usize> {
        debug_assert_eq!(self.anchor, Anchor::Start);
        self.regex.find(text).map(|m| m.end()).filter(|&len| len > 0)
    }
}

/// 같은 패턴 문자열을 한 번만 컴파일하기 위한 캐시
#[derive(Debug, Default)]
pub struct PatternCache {
    compiled: HashMap<(String, Anchor), Pattern>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compile(&mut self, source: &str, anchor: Anchor) -> Result<Pattern, TranscripaError> {
        let key = (source.to_string(), anchor);
        if let Some(pattern) = self.compiled.get(&key) {
            return Ok(pattern.clone());
        }
        let pattern = Pattern::compile(source, anchor)?;
        self.compiled.insert(key, pattern.clone());
        Ok(pattern)
    }

    /// 캐시된 패턴 수
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

/// 예외 규칙
///
/// 부모 규칙이 매칭된 뒤에만 검사합니다. 지정하지 않은 조건은 항상 만족으로 취급하므로
/// 조건이 하나도 없는 예외는 항상 적용됩니다.
#[derive(Debug, Clone)]
pub struct ExceptionRule {
    /// 부모 규칙이 매칭한 구간에 적용
    original: Option<Pattern>,
    prefix: Option<Pattern>,
    suffix: Option<Pattern>,
    replacement: String,
}

impl ExceptionRule {
    /// 조건 없는 예외 생성
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            original: None,
            prefix: None,
            suffix: None,
            replacement: replacement.into(),
        }
    }

    /// 컴파일된 패턴으로 예외 생성
    pub fn with_patterns(
        original: Option<Pattern>,
        prefix: Option<Pattern>,
        suffix: Option<Pattern>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            original,
            prefix,
            suffix,
            replacement: replacement.into(),
        }
    }

    /// 매칭 구간 조건 설정
    pub fn with_original(mut self, source: &str) -> Result<Self, TranscripaError> {
        self.original = Some(Pattern::compile(source, Anchor::Start)?);
        Ok(self)
    }

    /// 앞 문맥 조건 설정
    pub fn with_prefix(mut self, source: &str) -> Result<Self, TranscripaError> {
        self.prefix = Some(Pattern::compile(source, Anchor::End)?);
        Ok(self)
    }

    /// 뒤 문맥 조건 설정
    pub fn with_suffix(mut self, source: &str) -> Result<Self, TranscripaError> {
        self.suffix = Some(Pattern::compile(source, Anchor::Start)?);
        Ok(self)
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// 매칭 구간, 앞 문자열, 뒤 문자열에 대해 모든 조건을 만족하는지 확인
    pub fn is_match(&self, span: &str, prefix: &str, suffix: &str) -> bool {
        let holds = |pattern: &Option<Pattern>, text: &str| {
            pattern.as_ref().map_or(true, |p| p.is_match(text))
        };
        holds(&self.original, span) && holds(&self.prefix, prefix) && holds(&self.suffix, suffix)
    }
}

/// 규칙 매칭 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    /// 주 패턴이 소비한 길이 (바이트)
    pub length: usize,
    /// 출력할 치환 문자열
    pub replacement: &'a str,
}

/// 패턴 규칙 (전사/음역 공용)
#[derive(Debug, Clone)]
pub struct PatternRule {
    main: Pattern,
    prefix: Option<Pattern>,
    suffix: Option<Pattern>,
    replacement: String,
    exceptions: Vec<ExceptionRule>,
}

impl PatternRule {
    /// 주 패턴과 기본 치환 문자열로 규칙 생성
    pub fn new(original: &str, replacement: impl Into<String>) -> Result<Self, TranscripaError> {
        Ok(Self::with_patterns(
            Pattern::compile(original, Anchor::Start)?,
            None,
            None,
            replacement,
            Vec::new(),
        ))
    }

    /// 컴파일된 패턴으로 규칙 생성
    pub fn with_patterns(
        main: Pattern,
        prefix: Option<Pattern>,
        suffix: Option<Pattern>,
        replacement: impl Into<String>,
        exceptions: Vec<ExceptionRule>,
    ) -> Self {
        Self {
            main,
            prefix,
            suffix,
            replacement: replacement.into(),
            exceptions,
        }
    }

    /// 앞 문맥 설정
    pub fn with_prefix(mut self, source: &str) -> Result<Self, TranscripaError> {
        self.prefix = Some(Pattern::compile(source, Anchor::End)?);
        Ok(self)
    }

    /// 뒤 문맥 설정
    pub fn with_suffix(mut self, source: &str) -> Result<Self, TranscripaError> {
        self.suffix = Some(Pattern::compile(source, Anchor::Start)?);
        Ok(self)
    }

    /// 예외 추가 (선언 순서대로 검사됨)
    pub fn with_exception(mut self, exception: ExceptionRule) -> Self {
        self.exceptions.push(exception);
        self
    }

    pub fn original(&self) -> &Pattern {
        &self.main
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn exceptions(&self) -> &[ExceptionRule] {
        &self.exceptions
    }

    /// `text`의 `cursor` 위치에서 규칙 적용을 시도
    ///
    /// `cursor`는 문자 경계여야 합니다. 예외가 적용되어도 소비 길이는 주 패턴의 길이입니다.
    pub fn try_match<'a>(&'a self, text: &str, cursor: usize) -> Option<RuleMatch<'a>> {
        let length = self.main.match_len(text.get(cursor..)?)?;
        let span = &text[cursor..cursor + length];
        let prefix = &text[..cursor];
        let suffix = &text[cursor + length..];

        if let Some(ref p) = self.prefix {
            if !p.is_match(prefix) {
                return None;
            }
        }
        if let Some(ref s) = self.suffix {
            if !s.is_match(suffix) {
                return None;
            }
        }

        let replacement = self
            .exceptions
            .iter()
            .find(|e| e.is_match(span, prefix, suffix))
            .map_or(self.replacement.as_str(), |e| e.replacement());

        Some(RuleMatch {
            length,
            replacement,
        })
    }
}
