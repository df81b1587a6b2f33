use park_config::{AppConfig, ConfigError};

// 环境变量为进程级共享状态，所有断言放在同一个测试里顺序执行。
#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var/remove_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::remove_var("PARK_DATABASE_URL");
        std::env::remove_var("DATABASE_URL");
    }
    assert!(matches!(AppConfig::from_env(), Err(ConfigError::Missing(_))));

    unsafe {
        std::env::set_var("DATABASE_URL", "postgres://fallback/park");
        std::env::remove_var("PARK_HTTP_ADDR");
        std::env::set_var("PORT", "8088");
        std::env::remove_var("PARK_DB_MAX_CONNECTIONS");
        std::env::remove_var("PARK_AUTO_MIGRATE");
    }
    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.database_url, "postgres://fallback/park");
    assert_eq!(config.http_addr, "0.0.0.0:8088");
    assert_eq!(config.db_max_connections, 8);
    assert!(config.auto_migrate);

    unsafe {
        std::env::set_var("PARK_DATABASE_URL", "postgres://primary/park");
        std::env::set_var("PARK_HTTP_ADDR", "127.0.0.1:3001");
        std::env::set_var("PARK_DB_MAX_CONNECTIONS", "4");
        std::env::set_var("PARK_AUTO_MIGRATE", "false");
    }
    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.database_url, "postgres://primary/park");
    assert_eq!(config.http_addr, "127.0.0.1:3001");
    assert_eq!(config.db_max_connections, 4);
    assert!(!config.auto_migrate);

    unsafe {
        std::env::set_var("PARK_DB_MAX_CONNECTIONS", "many");
    }
    assert!(matches!(
        AppConfig::from_env(),
        Err(ConfigError::Invalid(key, _)) if key == "PARK_DB_MAX_CONNECTIONS"
    ));
}
