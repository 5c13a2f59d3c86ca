//! # Configuration Module
//!
//! 게이트 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring의 `@ConfigurationProperties`와 유사하게
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, Redis, 속도 제한 설정
//! - [`verification_config`] - 보호 경로, 코드 형식, 파라미터 이름 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, VerificationConfig};
//!
//! let env = Environment::current();
//! let bind = ServerConfig::bind_address();
//! let table = VerificationConfig::from_env().endpoint_table();
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@ConfigurationProperties(prefix = "security")` | `VerificationConfig::from_env()` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env.<PROFILE>` 파일 |

pub mod data_config;
pub mod verification_config;

pub use data_config::*;
pub use verification_config::*;
