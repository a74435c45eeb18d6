/// 转写 API 客户端
///
/// 封装所有与远端转写 API 相关的调用逻辑
use crate::config::Config;
use crate::models::{SubmitResponse, TranscriptStatusResponse};
use serde_json::json;
use tracing::{debug, error};

/// 转写 API 客户端
///
/// 持有整个批次共享的 HTTP 连接池。克隆开销很小，
/// 所有并发任务克隆同一个客户端即可共享连接。
#[derive(Clone)]
pub struct TranscribeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    language_code: String,
    speaker_labels: bool,
}

impl TranscribeClient {
    /// 创建新的转写客户端
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            language_code: config.language_code.clone(),
            speaker_labels: config.speaker_labels,
        }
    }

    /// 提交音频 URL，开始转写
    ///
    /// # 参数
    /// - `audio_url`: 音频文件地址
    ///
    /// # 返回
    /// 成功时返回远端分配的任务 ID。HTTP 失败或网络异常时返回 None，
    /// 错误只记录日志，单个提交失败不会中断整个批次。
    pub async fn submit(&self, audio_url: &str) -> Option<String> {
        let payload = json!({
            "audio_url": audio_url,
            "language_code": self.language_code,
            "speaker_labels": self.speaker_labels,
        });

        debug!("提交转写任务 Payload: {}", payload);

        let request = self
            .client
            .post(format!("{}/v2/transcript", self.base_url))
            .header("authorization", &self.api_key)
            .json(&payload);

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<SubmitResponse>().await {
                    Ok(body) => body.id,
                    Err(e) => {
                        error!("❌ 提交 URL {} 后无法解析响应: {}", audio_url, e);
                        None
                    }
                }
            }
            Ok(response) => {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                error!("❌ 提交 URL {} 失败: {} - {}", audio_url, status, error_text);
                None
            }
            Err(e) => {
                error!("❌ 提交 URL {} 时发生异常: {}", audio_url, e);
                None
            }
        }
    }

    /// 查询转写任务状态
    ///
    /// # 参数
    /// - `job_id`: 远端任务 ID
    ///
    /// # 返回
    /// HTTP 成功时返回解析后的响应体。失败时返回 None，
    /// 由调用方在等待间隔之后重试。
    pub async fn fetch_status(&self, job_id: &str) -> Option<TranscriptStatusResponse> {
        let request = self
            .client
            .get(format!("{}/v2/transcript/{}", self.base_url, job_id))
            .header("authorization", &self.api_key);

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<TranscriptStatusResponse>().await {
                    Ok(body) => Some(body),
                    Err(e) => {
                        error!("❌ 无法解析任务 {} 的状态响应: {}", job_id, e);
                        None
                    }
                }
            }
            Ok(response) => {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                error!("❌ 轮询任务 {} 失败: {} - {}", job_id, status, error_text);
                None
            }
            Err(e) => {
                error!("❌ 轮询任务 {} 时发生异常: {}", job_id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> Config {
        Config {
            api_base_url: base_url,
            api_key: "test-key".to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_submit_returns_job_id_on_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/transcript"))
            .and(header("authorization", "test-key"))
            .and(body_json(json!({
                "audio_url": "https://x/a.mp3",
                "language_code": "ko",
                "speaker_labels": true,
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": "j1", "status": "queued"})),
            )
            .mount(&server)
            .await;

        let client = TranscribeClient::new(&test_config(server.uri()));

        assert_eq!(
            client.submit("https://x/a.mp3").await,
            Some("j1".to_string())
        );
    }

    #[tokio::test]
    async fn test_submit_returns_none_on_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/transcript"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .mount(&server)
            .await;

        let client = TranscribeClient::new(&test_config(server.uri()));

        assert_eq!(client.submit("https://x/a.mp3").await, None);
    }

    #[tokio::test]
    async fn test_submit_returns_none_on_connection_error() {
        // 没有任何服务监听的端口
        let client = TranscribeClient::new(&test_config("http://127.0.0.1:1".to_string()));

        assert_eq!(client.submit("https://x/a.mp3").await, None);
    }

    #[tokio::test]
    async fn test_fetch_status_parses_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/transcript/j1"))
            .and(header("authorization", "test-key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "j1", "status": "processing"})),
            )
            .mount(&server)
            .await;

        let client = TranscribeClient::new(&test_config(server.uri()));
        let response = client.fetch_status("j1").await.unwrap();

        assert_eq!(response.status, "processing");
        assert_eq!(response.id.as_deref(), Some("j1"));
    }

    #[tokio::test]
    async fn test_fetch_status_returns_none_on_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/transcript/j1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = TranscribeClient::new(&test_config(server.uri()));

        assert!(client.fetch_status("j1").await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_status_returns_none_on_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/transcript/j1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = TranscribeClient::new(&test_config(server.uri()));

        assert!(client.fetch_status("j1").await.is_none());
    }
}
