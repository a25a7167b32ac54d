//! 규칙 로드/언어 선택 에러
//!
//! 변환 연산(decompose/romanize/transcribe)은 실패하지 않습니다.
//! 에러는 규칙 로드, 언어/프로필 선택 시점에만 발생합니다.

/// Transcripa 에러
#[derive(Debug)]
pub enum TranscripaError {
    /// 패턴 문자열이 올바른 정규식이 아님
    PatternCompile { pattern: String, message: String },
    /// 등록되지 않은 언어 이름
    UnknownLanguage(String),
    /// 현재 선택된 언어 없음
    NoCurrentLanguage,
    /// 이미 등록된 언어 이름
    DuplicateLanguage(String),
    /// 로마자 표기 프로필 인덱스 범위 초과
    ProfileIndexOutOfRange { index: usize, len: usize },
    /// 이름으로 찾을 수 없는 프로필
    UnknownProfile(String),
    /// 숫자가 아닌 프로필 인덱스 인자
    InvalidProfileIndex(String),
    /// 분해 공식의 숫자 필드 오류 (로더에서 보고)
    MalformedNumericField {
        language: String,
        field: String,
        value: String,
    },
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱 실패
    Parse(String),
}

impl std::fmt::Display for TranscripaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscripaError::PatternCompile { pattern, message } => {
                write!(f, "패턴 컴파일 실패 '{}': {}", pattern, message)
            }
            TranscripaError::UnknownLanguage(name) => write!(f, "알 수 없는 언어: {}", name),
            TranscripaError::NoCurrentLanguage => write!(f, "선택된 언어가 없습니다"),
            TranscripaError::DuplicateLanguage(name) => {
                write!(f, "이미 등록된 언어: {}", name)
            }
            TranscripaError::ProfileIndexOutOfRange { index, len } => write!(
                f,
                "프로필 인덱스 범위 초과: {} (프로필 수 {})",
                index, len
            ),
            TranscripaError::UnknownProfile(name) => write!(f, "알 수 없는 프로필: {}", name),
            TranscripaError::InvalidProfileIndex(arg) => {
                write!(f, "프로필 인덱스는 0 이상의 정수여야 합니다: {:?}", arg)
            }
            TranscripaError::MalformedNumericField {
                language,
                field,
                value,
            } => write!(
                f,
                "[{}] 분해 규칙의 숫자 필드 오류 {}={:?}",
                language, field, value
            ),
            TranscripaError::Io(e) => write!(f, "파일 읽기 오류: {}", e),
            TranscripaError::Parse(s) => write!(f, "JSON 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for TranscripaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscripaError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TranscripaError {
    fn from(e: std::io::Error) -> Self {
        TranscripaError::Io(e)
    }
}

impl From<serde_json::Error> for TranscripaError {
    fn from(e: serde_json::Error) -> Self {
        TranscripaError::Parse(e.to_string())
    }
}
