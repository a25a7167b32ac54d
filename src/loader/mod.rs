//! 규칙 문서 로더
//!
//! JSON 규칙 문서를 한 번 파싱해 언어 목록을 만들고, 각 언어에는 자기 몫의
//! 레코드만 넘겨줍니다. 패턴 컴파일은 언어를 처음 로드할 때 수행됩니다.
//!
//! # 사용 예시
//!
//! ```
//! use transcripa::loader::RuleLoader;
//!
//! let json = r#"{ "languages": [
//!     { "iso": "rus", "name": "Russian",
//!       "transcriptions": [ { "original": "ж", "replacement": "ʐ" } ] } ] }"#;
//!
//! let loader = RuleLoader::new(true);
//! let mut loaded = loader.load_json(json).unwrap();
//! assert!(loaded.errors.is_empty());
//!
//! let errors = loaded.registry.load("Russian").unwrap();
//! loader.report(&errors);
//! assert_eq!(loaded.registry.current().unwrap().transcribe("жук", true, true), "ʐук");
//! ```

mod document;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub use document::{
    DecompositionRecord, LanguageDocument, NumericField, PrevFactorRecord, RuleDocument,
};

use crate::error::TranscripaError;
use crate::language::{LanguageRegistry, LanguageRules};

/// 로드 결과
#[derive(Debug)]
pub struct LoadedRules {
    pub registry: LanguageRegistry,
    /// 건너뛴 분해 공식/언어의 에러
    pub errors: Vec<TranscripaError>,
}

/// 규칙 문서 로더
#[derive(Debug, Clone, Copy)]
pub struct RuleLoader {
    /// 에러를 error 레벨로 출력할지 여부 (false면 debug 레벨)
    show_errors: bool,
}

impl Default for RuleLoader {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RuleLoader {
    pub fn new(show_errors: bool) -> Self {
        Self { show_errors }
    }

    pub fn show_errors(&self) -> bool {
        self.show_errors
    }

    /// JSON 파일에서 규칙 문서 로드
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedRules, TranscripaError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let document: RuleDocument = serde_json::from_reader(reader)?;
        log::debug!("규칙 문서 로드: {}", path.as_ref().display());
        Ok(self.load_document(document))
    }

    /// JSON 문자열에서 규칙 문서 로드
    pub fn load_json(&self, json: &str) -> Result<LoadedRules, TranscripaError> {
        let document: RuleDocument = serde_json::from_str(json)?;
        Ok(self.load_document(document))
    }

    /// 파싱된 문서로 언어 목록 생성
    ///
    /// 숫자 필드가 잘못된 분해 공식은 건너뛰고 나머지 규칙은 유지합니다.
    pub fn load_document(&self, document: RuleDocument) -> LoadedRules {
        let mut registry = LanguageRegistry::new();
        let mut errors = Vec::new();

        for language in document.languages {
            let mut decompositions = Vec::with_capacity(language.decompositions.len());
            for record in &language.decompositions {
                match record.to_rule(&language.name) {
                    Ok(rule) => decompositions.push(rule),
                    Err(e) => errors.push(e),
                }
            }

            let rules = LanguageRules {
                transcriptions: language.transcriptions,
                romanizations: language.romanizations,
                decompositions,
            };
            if let Err(e) = registry.register_with_rules(language.iso, language.name, rules) {
                errors.push(e);
            }
        }

        self.report(&errors);
        LoadedRules { registry, errors }
    }

    /// 로드 에러 출력
    pub fn report(&self, errors: &[TranscripaError]) {
        for e in errors {
            if self.show_errors {
                log::error!("규칙 로드 에러: {}", e);
            } else {
                log::debug!("규칙 로드 에러: {}", e);
            }
        }
    }
}
