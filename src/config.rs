use std::time::Duration;

pub const ENV_API_URL: &str = "PLANT_ID_API_URL";
pub const ENV_SOURCE: &str = "PLANT_ID_SOURCE";
pub const ENV_FALLBACK_TO_SAMPLE: &str = "PLANT_ID_FALLBACK_TO_SAMPLE";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "PLANT_ID_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionSource {
    #[default]
    Http,
    Sample,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub prediction_source: PredictionSource,
    pub fallback_to_sample: bool,
    pub request_timeout: Option<Duration>,
    pub sample_delay: Duration,
    pub logger_timezone: chrono::FixedOffset,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            prediction_source: PredictionSource::Http,
            fallback_to_sample: false,
            request_timeout: None,
            sample_delay: Duration::from_secs(2),
            logger_timezone: local_offset(),
            window_size: [720.0, 860.0],
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(url) = var(ENV_API_URL) {
            config.api_base_url = url;
        }

        if let Some(source) = var(ENV_SOURCE) {
            match source.to_lowercase().as_str() {
                "http" => config.prediction_source = PredictionSource::Http,
                "sample" => config.prediction_source = PredictionSource::Sample,
                _ => {}
            }
        }

        if let Some(flag) = var(ENV_FALLBACK_TO_SAMPLE) {
            config.fallback_to_sample = parse_flag(&flag);
        }

        if let Some(secs) = var(ENV_REQUEST_TIMEOUT_SECS).and_then(|s| s.parse::<u64>().ok()) {
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        config
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_base_url.trim_end_matches('/'))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
