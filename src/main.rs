//! DonationAlerts 소셜 로그인 운영 도구
//!
//! 환경 변수의 자격 증명으로 OAuth 플로우의 각 단계를 직접 실행해 봅니다.
//! 애플리케이션 등록 직후 redirect URI나 스코프 설정을 확인할 때 사용합니다.
//!
//! ```bash
//! donationalerts_auth authorize
//! donationalerts_auth exchange <CODE> --state <STATE> --expected-state <STATE>
//! donationalerts_auth user <ACCESS_TOKEN>
//! donationalerts_auth refresh <REFRESH_TOKEN>
//! ```

use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use serde::Serialize;

use donationalerts_auth::config::DonationAlertsConfig;
use donationalerts_auth::services::auth::{DonationAlertsAuthService, verify_state};
use donationalerts_auth::{AuthError, AuthResult, TokenResponse};

#[derive(Parser, Debug)]
#[command(name = "donationalerts_auth")]
#[command(about = "DonationAlerts OAuth 2.0 login flow tool")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the authorization URL and the state to store
    Authorize {
        /// State to embed. A random one is generated when omitted
        #[arg(long)]
        state: Option<String>,
    },

    /// Exchange an authorization code and fetch the user
    Exchange {
        code: String,

        /// State received on the callback
        #[arg(long, requires = "expected_state")]
        state: Option<String>,

        /// State issued by `authorize`
        #[arg(long)]
        expected_state: Option<String>,
    },

    /// Fetch and normalize the user behind an access token
    User { access_token: String },

    /// Obtain a new access token with a refresh token
    Refresh { refresh_token: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    load_env_file();
    init_logging();

    let args = Args::parse();

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("실행 실패: {}", e);
            eprintln!("error: {}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

async fn run(command: Command) -> AuthResult<()> {
    let credentials = DonationAlertsConfig::credentials()?;
    let service = DonationAlertsAuthService::new(credentials);

    match command {
        Command::Authorize { state } => {
            let login = service.login_url(state);
            print_json(&login)
        }
        Command::Exchange {
            code,
            state,
            expected_state,
        } => {
            if let (Some(received), Some(expected)) = (state.as_deref(), expected_state.as_deref()) {
                verify_state(expected, received)?;
                info!("state 검증 완료");
            }

            let authenticated = service.user_from_code(&code).await?;
            log_expiry(&authenticated.token);
            print_json(&authenticated)
        }
        Command::User { access_token } => {
            let user = service.user_from_token(&access_token).await?;
            print_json(&user)
        }
        Command::Refresh { refresh_token } => {
            let token = service.refresh_access_token(&refresh_token).await?;
            log_expiry(&token);
            print_json(&token)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> AuthResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn log_expiry(token: &TokenResponse) {
    match token.expires_at(Utc::now()) {
        Some(at) => info!("액세스 토큰 만료 시각: {}", at.to_rfc3339()),
        None => info!("액세스 토큰 만료 시각 정보 없음"),
    }
}

/// 설정 오류와 프로바이더 오류를 구분할 수 있도록 종료 코드를 나눕니다.
fn exit_code(error: &AuthError) -> u8 {
    match error {
        AuthError::Configuration(_) => 2,
        e if e.is_authentication_failure() => 3,
        _ => 1,
    }
}

/// 환경 파일을 로드합니다
///
/// `PROFILE` 환경 변수에 따라 `.env.prod`, `.env.dev` 또는 기본 `.env`를 읽습니다.
/// 파일이 없어도 이미 설정된 환경 변수로 동작할 수 있으므로 실패는 무시합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").is_ok(),
        "dev" => dotenv::from_filename(".env.dev").is_ok(),
        _ => dotenv().is_ok(),
    };

    // 로거 초기화 전이므로 stderr로 남김
    if !loaded {
        eprintln!("{} 프로필 환경 파일을 찾지 못했습니다", profile);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
///
/// ```bash
/// RUST_LOG=donationalerts_auth=debug donationalerts_auth user <TOKEN>
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
