//! 변환 엔진: 문자 분해, 패턴 규칙 매칭, 규칙 목록 스캔

pub mod decomposition;
pub mod pattern;
pub mod romanization;
pub mod scanner;

pub use decomposition::{decompose, DecompositionRule};
pub use pattern::{Anchor, ExceptionRule, Pattern, PatternCache, PatternRule, RuleMatch};
pub use romanization::RomanizationProfile;
pub use scanner::{scan, SENTINEL};
