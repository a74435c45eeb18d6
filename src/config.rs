use std::time::Duration;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 转写 API 密钥
    pub api_key: String,
    /// 转写 API 基础地址
    pub api_base_url: String,
    /// 音频 URL 列表输入文件
    pub input_urls_file: String,
    /// 转写结果输出文件
    pub output_transcripts_file: String,
    /// 转写语言代码
    pub language_code: String,
    /// 是否启用说话人分离
    pub speaker_labels: bool,
    /// 最大轮询次数
    pub max_polling_attempts: u32,
    /// 轮询间隔（秒）
    pub polling_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: "674d42163f3a448ea246cc6b877a4eac".to_string(),
            api_base_url: "https://api.assemblyai.com".to_string(),
            input_urls_file: "mp3links.json".to_string(),
            output_transcripts_file: "topik-30-days.json".to_string(),
            language_code: "ko".to_string(),
            speaker_labels: true,
            max_polling_attempts: 250,
            polling_interval_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_key: std::env::var("ASSEMBLYAI_API_KEY").unwrap_or(default.api_key),
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            input_urls_file: std::env::var("INPUT_URLS_FILE").unwrap_or(default.input_urls_file),
            output_transcripts_file: std::env::var("OUTPUT_TRANSCRIPTS_FILE").unwrap_or(default.output_transcripts_file),
            language_code: std::env::var("LANGUAGE_CODE").unwrap_or(default.language_code),
            speaker_labels: std::env::var("SPEAKER_LABELS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.speaker_labels),
            max_polling_attempts: std::env::var("MAX_POLLING_ATTEMPTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_polling_attempts),
            polling_interval_secs: std::env::var("POLLING_INTERVAL_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.polling_interval_secs),
        }
    }

    /// 轮询间隔对应的 Duration
    pub fn polling_interval(&self) -> Duration {
        Duration::from_secs(self.polling_interval_secs)
    }
}
