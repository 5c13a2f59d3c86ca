//! 인증 코드 게이트 설정 모듈
//!
//! 어떤 경로가 인증 코드를 요구하는지, 코드의 길이와 유효 시간,
//! 제출 파라미터 이름, 세션 쿠키 이름을 환경 변수에서 읽어옵니다.
//!
//! 설정은 시작 시점에 한 번 읽혀 [`VerificationConfig`]로 고정되며,
//! 게이트는 여기서 만들어진 [`EndpointTable`]만 참조합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 로그인 처리 URL (각각 이미지 / SMS 코드로 보호)
//! export SIGNIN_PROCESS_URL_FORM="/authentication/form"
//! export SIGNIN_PROCESS_URL_MOBILE="/authentication/mobile"
//!
//! # 추가로 보호할 경로 (쉼표 구분, Ant 패턴)
//! export IMAGE_CODE_URLS="/user/register,/user/password/**"
//! export SMS_CODE_URLS="/auth/sms/*"
//!
//! # 코드 형식
//! export IMAGE_CODE_LENGTH="4"
//! export IMAGE_CODE_EXPIRE_SECONDS="60"
//! export SMS_CODE_LENGTH="6"
//! export SMS_CODE_EXPIRE_SECONDS="60"
//!
//! # 제출 파라미터 / 세션 쿠키
//! export IMAGE_CODE_PARAMETER="imageCode"
//! export SMS_CODE_PARAMETER="smsCode"
//! export VERIFICATION_SESSION_COOKIE="SESSION"
//! ```

use std::env;
use std::str::FromStr;
use crate::domain::verification::{CodeKind, EndpointTable};

const DEFAULT_SIGNIN_PROCESS_URL_FORM: &str = "/authentication/form";
const DEFAULT_SIGNIN_PROCESS_URL_MOBILE: &str = "/authentication/mobile";
const DEFAULT_SESSION_COOKIE: &str = "SESSION";

/// 코드 종류별 설정
#[derive(Debug, Clone, PartialEq)]
pub struct CodeSettings {
    /// 발급할 코드의 자릿수
    pub length: usize,
    /// 발급 시점부터의 유효 시간 (초)
    pub expire_in_seconds: i64,
    /// 이 종류의 코드로 보호할 추가 경로 패턴
    pub urls: Vec<String>,
    /// 제출된 코드를 읽을 요청 파라미터 이름
    pub parameter: String,
}

impl CodeSettings {
    fn defaults_for(kind: CodeKind) -> Self {
        let (length, expire_in_seconds) = match kind {
            CodeKind::Image => (4, 60),
            CodeKind::Sms => (6, 60),
        };

        Self {
            length,
            expire_in_seconds,
            urls: Vec::new(),
            parameter: kind.default_parameter_name().to_string(),
        }
    }

    fn from_env(kind: CodeKind) -> Self {
        let defaults = Self::defaults_for(kind);
        let prefix = kind.as_str().to_uppercase();

        Self {
            length: env_or(&format!("{}_CODE_LENGTH", prefix), defaults.length),
            expire_in_seconds: env_or(
                &format!("{}_CODE_EXPIRE_SECONDS", prefix),
                defaults.expire_in_seconds,
            ),
            urls: env::var(format!("{}_CODE_URLS", prefix))
                .map(|raw| split_urls(&raw))
                .unwrap_or_default(),
            parameter: env::var(format!("{}_CODE_PARAMETER", prefix))
                .ok()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.parameter),
        }
    }
}

/// 인증 코드 게이트 전체 설정
///
/// # Examples
///
/// ```rust,ignore
/// let config = VerificationConfig::from_env();
/// let table = config.endpoint_table();
///
/// assert_eq!(table.classify("/authentication/form"), Some(CodeKind::Image));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationConfig {
    /// 폼 로그인 처리 URL (이미지 코드로 보호)
    pub signin_process_url_form: String,
    /// 휴대폰 로그인 처리 URL (SMS 코드로 보호)
    pub signin_process_url_mobile: String,
    /// 이미지 코드 설정
    pub image: CodeSettings,
    /// SMS 코드 설정
    pub sms: CodeSettings,
    /// 세션 식별자를 담는 쿠키 이름
    pub session_cookie: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            signin_process_url_form: DEFAULT_SIGNIN_PROCESS_URL_FORM.to_string(),
            signin_process_url_mobile: DEFAULT_SIGNIN_PROCESS_URL_MOBILE.to_string(),
            image: CodeSettings::defaults_for(CodeKind::Image),
            sms: CodeSettings::defaults_for(CodeKind::Sms),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
        }
    }
}

impl VerificationConfig {
    /// 환경 변수에서 설정을 읽어옵니다. 누락된 값은 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let config = Self {
            signin_process_url_form: env::var("SIGNIN_PROCESS_URL_FORM")
                .unwrap_or_else(|_| DEFAULT_SIGNIN_PROCESS_URL_FORM.to_string()),
            signin_process_url_mobile: env::var("SIGNIN_PROCESS_URL_MOBILE")
                .unwrap_or_else(|_| DEFAULT_SIGNIN_PROCESS_URL_MOBILE.to_string()),
            image: CodeSettings::from_env(CodeKind::Image),
            sms: CodeSettings::from_env(CodeKind::Sms),
            session_cookie: env::var("VERIFICATION_SESSION_COOKIE")
                .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE.to_string()),
        };

        log::info!("인증 코드 설정 로드됨: {:?}", config);
        config
    }

    /// 코드 종류별 설정을 반환합니다.
    pub fn settings(&self, kind: CodeKind) -> &CodeSettings {
        match kind {
            CodeKind::Image => &self.image,
            CodeKind::Sms => &self.sms,
        }
    }

    /// 코드 종류별 제출 파라미터 이름을 반환합니다.
    pub fn parameter_name(&self, kind: CodeKind) -> &str {
        &self.settings(kind).parameter
    }

    /// 보호 경로 테이블을 구성합니다.
    ///
    /// 등록 순서는 폼 로그인 URL(이미지), 휴대폰 로그인 URL(SMS),
    /// 이미지 추가 경로, SMS 추가 경로 순입니다. 매칭은 이 순서대로 시도되어
    /// 먼저 등록된 패턴이 우선합니다.
    pub fn endpoint_table(&self) -> EndpointTable {
        EndpointTable::builder()
            .register(&self.signin_process_url_form, CodeKind::Image)
            .register(&self.signin_process_url_mobile, CodeKind::Sms)
            .register_all(&self.image.urls, CodeKind::Image)
            .register_all(&self.sms.urls, CodeKind::Sms)
            .build()
    }
}

/// 쉼표로 구분된 URL 목록을 분리합니다.
///
/// 각 항목의 앞뒤 공백을 제거하고 빈 항목은 버립니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(split_urls(" /a, /b/*,,"), vec!["/a", "/b/*"]);
/// ```
pub fn split_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::error!("{} 파싱 실패: {:?}. 기본값 사용", name, raw);
            default
        }),
        Err(_) => default,
    }
}
