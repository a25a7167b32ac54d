//! 언어 목록 관리
//!
//! 시작 시 언어를 이름/ISO 코드만으로 등록하고, 실제 규칙은 처음 사용할 때 로드합니다.

use std::collections::HashMap;

use crate::error::TranscripaError;

use super::records::LanguageRules;
use super::rule_set::LanguageRuleSet;

/// 표시 이름 -> 언어 규칙 모음
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    /// 등록 순서 유지
    languages: Vec<LanguageRuleSet>,
    /// 아직 로드되지 않은 언어의 규칙 레코드
    pending: HashMap<String, LanguageRules>,
    current: Option<usize>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 규칙 없이 언어 등록
    pub fn register(
        &mut self,
        iso_code: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), TranscripaError> {
        self.register_with_rules(iso_code, name, LanguageRules::new())
    }

    /// 나중에 로드할 규칙 레코드와 함께 언어 등록
    pub fn register_with_rules(
        &mut self,
        iso_code: impl Into<String>,
        name: impl Into<String>,
        rules: LanguageRules,
    ) -> Result<(), TranscripaError> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(TranscripaError::DuplicateLanguage(name));
        }
        if !rules.is_empty() {
            self.pending.insert(name.clone(), rules);
        }
        self.languages.push(LanguageRuleSet::new(iso_code, name));
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.languages.iter().position(|l| l.name() == name)
    }

    fn require(&self, name: &str) -> Result<usize, TranscripaError> {
        self.position(name)
            .ok_or_else(|| TranscripaError::UnknownLanguage(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Result<&LanguageRuleSet, TranscripaError> {
        let index = self.require(name)?;
        Ok(&self.languages[index])
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut LanguageRuleSet, TranscripaError> {
        let index = self.require(name)?;
        Ok(&mut self.languages[index])
    }

    /// 등록된 언어 이름 목록 (등록 순서)
    pub fn list_names(&self) -> Vec<String> {
        self.languages.iter().map(|l| l.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// 언어를 로드하고 현재 언어로 선택
    ///
    /// 이미 로드된 언어는 다시 로드하지 않고 선택만 합니다.
    /// 반환값은 건너뛴 규칙의 에러 목록입니다.
    pub fn load(&mut self, name: &str) -> Result<Vec<TranscripaError>, TranscripaError> {
        let index = self.require(name)?;
        self.current = Some(index);

        let rules = self.pending.remove(name).unwrap_or_default();
        Ok(self.languages[index].load(rules))
    }

    /// 현재 선택된 언어
    pub fn current(&self) -> Result<&LanguageRuleSet, TranscripaError> {
        self.current
            .and_then(|i| self.languages.get(i))
            .ok_or(TranscripaError::NoCurrentLanguage)
    }

    pub fn current_mut(&mut self) -> Result<&mut LanguageRuleSet, TranscripaError> {
        self.current
            .and_then(|i| self.languages.get_mut(i))
            .ok_or(TranscripaError::NoCurrentLanguage)
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current
            .and_then(|i| self.languages.get(i))
            .map(|l| l.name())
    }
}
