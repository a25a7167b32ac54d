//! 언어별 규칙 모음과 언어 목록
//!
//! # 사용 예시
//!
//! ```
//! use transcripa::language::{LanguageRegistry, LanguageRules, PatternRuleRecord, RomanizationRecord};
//!
//! let rules = LanguageRules {
//!     romanizations: vec![RomanizationRecord {
//!         name: "Simple".into(),
//!         transliterations: vec![PatternRuleRecord::new("ж", "zh")],
//!     }],
//!     transcriptions: vec![PatternRuleRecord::new("zh", "ʐ")],
//!     ..LanguageRules::default()
//! };
//!
//! let mut registry = LanguageRegistry::new();
//! registry.register_with_rules("rus", "Russian", rules).unwrap();
//! assert!(registry.load("Russian").unwrap().is_empty());
//!
//! let russian = registry.current_mut().unwrap();
//! russian.select_profile(0).unwrap();
//! let romanized = russian.romanize("жук", false);
//! assert_eq!(romanized, "zhук");
//! assert_eq!(russian.transcribe(&romanized, true, true), "ʐук");
//! ```

mod records;
mod registry;
mod rule_set;

pub use records::{
    compile_all, ExceptionRecord, LanguageRules, PatternRuleRecord, RomanizationRecord,
};
pub use registry::LanguageRegistry;
pub use rule_set::LanguageRuleSet;
