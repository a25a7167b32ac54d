//! 규칙 목록 스캐너
//!
//! 로마자 표기와 발음 전사가 공유하는 좌→우 스캔 알고리즘.
//! 각 위치에서 선언 순서대로 규칙을 검사하고 처음 매칭된 규칙을 적용합니다.

use super::pattern::PatternRule;

/// 문자열 양 끝에 붙이는 경계 문자
pub const SENTINEL: char = ' ';

/// 규칙 목록으로 문자열을 변환
///
/// 문자열 앞뒤에 경계 문자를 붙여 문자열 끝에서도 문맥 규칙이 똑같이 동작하도록 하고,
/// 경계 문자 사이의 위치만 스캔합니다. 매칭되는 규칙이 없으면 문자를 그대로 출력합니다.
pub fn scan(text: &str, rules: &[PatternRule]) -> String {
    if rules.is_empty() {
        return text.to_string();
    }

    let padded = format!("{}{}{}", SENTINEL, text, SENTINEL);
    let end = padded.len() - SENTINEL.len_utf8();
    let mut output = String::with_capacity(padded.len());
    let mut cursor = SENTINEL.len_utf8();

    while cursor < end {
        // 첫 번째 매칭 우선 (최장 매칭 아님)
        if let Some(m) = rules.iter().find_map(|rule| rule.try_match(&padded, cursor)) {
            output.push_str(m.replacement);
            cursor += m.length;
            continue;
        }

        match padded[cursor..].chars().next() {
            Some(c) => {
                output.push(c);
                cursor += c.len_utf8();
            }
            None => break,
        }
    }

    output
}
