//! Transcripa - 규칙 기반 로마자 표기/발음 전사
//!
//! 사용법: transcripa [RULES_JSON] LANGUAGE [PROFILE_INDEX]
//! 표준 입력의 각 줄을 "분해\t로마자\t발음" 형식으로 출력합니다.
//! 성공적으로 실행되면 사용한 언어/프로필을 설정 파일에 기록합니다.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use transcripa::config::{load_config, save_config, TranscripaConfig};
use transcripa::{RuleLoader, TranscripaError};

/// 명령행 인자 (설정 파일 값보다 우선)
#[derive(Debug, PartialEq, Eq)]
struct Args {
    rules_path: String,
    language: Option<String>,
    profile: Option<usize>,
}

fn parse_args(
    args: impl IntoIterator<Item = String>,
    config: &TranscripaConfig,
) -> Result<Args, TranscripaError> {
    let mut positional: Vec<String> = args.into_iter().collect();

    // 첫 인자가 .json이면 규칙 문서 경로
    let rules_path = if positional.first().is_some_and(|a| a.ends_with(".json")) {
        positional.remove(0)
    } else {
        config.rules_path.clone()
    };
    let mut positional = positional.into_iter();
    let language = positional.next().or_else(|| config.language.clone());
    let profile = match positional.next() {
        Some(arg) => Some(
            arg.parse()
                .map_err(|_| TranscripaError::InvalidProfileIndex(arg))?,
        ),
        None => config.profile,
    };

    Ok(Args {
        rules_path,
        language,
        profile,
    })
}

fn run(config: &mut TranscripaConfig) -> Result<(), TranscripaError> {
    let args = parse_args(std::env::args().skip(1), config)?;
    let loader = RuleLoader::new(config.show_errors);
    // 문서 단계의 에러는 로더가 이미 출력함
    let mut registry = loader.load(&args.rules_path)?.registry;

    let language = match args.language {
        Some(name) => name,
        None => {
            eprintln!("언어를 지정해주세요. 사용 가능한 언어:");
            for name in registry.list_names() {
                eprintln!("  {}", name);
            }
            return Err(TranscripaError::NoCurrentLanguage);
        }
    };

    let errors = registry.load(&language)?;
    loader.report(&errors);

    let rule_set = registry.current_mut()?;
    if let Some(index) = args.profile {
        rule_set.select_profile(index)?;
    } else if !rule_set.romanizations().is_empty() {
        rule_set.select_profile(0)?;
    }
    log::info!(
        "언어: {} ({}), 프로필: {}",
        rule_set.name(),
        rule_set.iso_code(),
        rule_set.current_profile_name().unwrap_or("-")
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        // 분해는 한 번만 수행
        let decomposed = rule_set.decompose(&line);
        let romanized = rule_set.romanize(&decomposed, true);
        let transcribed = rule_set.transcribe(&romanized, true, true);
        writeln!(stdout, "{}\t{}\t{}", decomposed, romanized, transcribed)?;
    }

    if config.remember_selection(rule_set.name(), rule_set.current_profile_index()) {
        if let Err(e) = save_config(config) {
            log::warn!("설정 저장 실패: {}", e);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = load_config();
    match run(&mut config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
