use reports_config::{AppConfig, ConfigError};

// 环境变量是进程级共享状态，所有断言放在同一个测试中顺序执行。
#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::remove_var("REPORTS_JWT_SECRET");
    }
    assert!(matches!(AppConfig::from_env(), Err(ConfigError::Missing(_))));

    unsafe {
        std::env::set_var("REPORTS_JWT_SECRET", "secret");
        std::env::set_var("REPORTS_HTTP_ADDR", "127.0.0.1:8081");
        std::env::set_var("REPORTS_FIXTURE_PATH", "fixtures/occurrences.json");
        std::env::set_var("REPORTS_ENGINE_TIMEOUT_MS", "0");
    }
    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8081");
    assert_eq!(config.jwt_secret, "secret");
    assert_eq!(
        config.fixture_path.as_deref(),
        Some(std::path::Path::new("fixtures/occurrences.json"))
    );
    assert_eq!(config.engine_timeout_ms, None);

    unsafe {
        std::env::set_var("REPORTS_ENGINE_TIMEOUT_MS", "soon");
    }
    assert!(matches!(AppConfig::from_env(), Err(ConfigError::Invalid(_, _))));

    unsafe {
        std::env::remove_var("REPORTS_ENGINE_TIMEOUT_MS");
    }
    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.engine_timeout_ms, Some(30_000));
}
