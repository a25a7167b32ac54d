//! 로마자 표기 방식 (프로필)

use super::pattern::PatternRule;
use super::scanner::scan;

/// 이름이 붙은 로마자 표기 규칙 목록
#[derive(Debug, Clone)]
pub struct RomanizationProfile {
    name: String,
    rules: Vec<PatternRule>,
}

impl RomanizationProfile {
    pub fn new(name: impl Into<String>, rules: Vec<PatternRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// 규칙 목록으로 문자열을 로마자로 변환
    pub fn romanize(&self, text: &str) -> String {
        scan(text, &self.rules)
    }
}
