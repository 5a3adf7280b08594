use std::path::PathBuf;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./work_dir | 工作目录 (设置文件、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_RETENTION_DAYS | 14 | 日志保留天数 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/venue HTTP_PORT=8080 cargo run -p venue-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志保留天数
    pub log_retention_days: i64,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            http_port: env_or("HTTP_PORT", 3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_or("LOG_JSON", false),
            log_retention_days: env_or("LOG_RETENTION_DAYS", 14),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 控制台是否输出 JSON: 生产环境总是 JSON，其余按 LOG_JSON
    pub fn json_logs(&self) -> bool {
        self.log_json || self.is_production()
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 设备设置文件 (打印机、PIN)
    pub fn settings_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("settings.json")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_and_paths() {
        let config = Config::with_overrides("/tmp/venue-test", 4100);
        assert_eq!(config.http_port, 4100);
        assert_eq!(config.settings_path(), PathBuf::from("/tmp/venue-test/settings.json"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/venue-test/logs"));
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::with_overrides("/tmp/venue-test", 0);
        config.environment = "production".into();
        assert!(config.is_production());
    }

    #[test]
    fn test_production_logs_are_json() {
        let mut config = Config::with_overrides("/tmp/venue-test", 0);
        config.environment = "development".into();
        config.log_json = false;
        assert!(!config.json_logs());

        config.log_json = true;
        assert!(config.json_logs());

        config.environment = "production".into();
        config.log_json = false;
        assert!(config.json_logs());
    }

    #[test]
    fn test_ensure_work_dir_structure() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = dir.path().join("work");
        let config = Config::with_overrides(work_dir.to_string_lossy(), 0);
        config.ensure_work_dir_structure().unwrap();
        assert!(config.log_dir().is_dir());
    }
}
