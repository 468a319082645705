/// Failures reported by a location source
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("Geolocation is not supported in this environment")]
    UnsupportedEnvironment,

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("Timed out acquiring position")]
    Timeout,

    #[error("Location error: {0}")]
    Other(String),
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),

    #[error("Upstream request failed: {0}")]
    UpstreamRequestFailed(String),

    #[error("No location matched the given time/style filters, refine and retry")]
    NoResultsFound,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamRequestFailed(err.to_string())
    }
}

impl AppError {
    /// Message shown to the user when a search ends in this error
    pub fn user_message(&self) -> String {
        match self {
            AppError::Geolocation(GeolocationError::UnsupportedEnvironment) => {
                "您的瀏覽器不支援地理定位功能。".to_string()
            }
            AppError::Geolocation(GeolocationError::PermissionDenied) => {
                "位置權限被拒絕。請在瀏覽器設定中允許存取位置。".to_string()
            }
            AppError::Geolocation(GeolocationError::PositionUnavailable) => {
                "無法取得位置資訊。".to_string()
            }
            AppError::Geolocation(GeolocationError::Timeout) => "獲取位置逾時。".to_string(),
            AppError::Geolocation(GeolocationError::Other(_)) => {
                "獲取位置時發生錯誤。".to_string()
            }
            AppError::UpstreamRequestFailed(msg) => format!("獲取推薦失敗: {}", msg),
            AppError::NoResultsFound => {
                "獲取推薦失敗: 找不到符合該時段或風格的推薦地點，請嘗試調整搜尋條件。".to_string()
            }
            AppError::Config(_) => "發生未預期的錯誤".to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_wraps_upstream() {
        let err = AppError::UpstreamRequestFailed("quota exceeded".to_string());
        assert_eq!(err.user_message(), "獲取推薦失敗: quota exceeded");
    }

    #[test]
    fn test_user_message_no_results_reads_as_failed_fetch() {
        assert_eq!(
            AppError::NoResultsFound.user_message(),
            "獲取推薦失敗: 找不到符合該時段或風格的推薦地點，請嘗試調整搜尋條件。"
        );
    }

    #[test]
    fn test_user_message_permission_denied() {
        let err = AppError::from(GeolocationError::PermissionDenied);
        assert_eq!(
            err.user_message(),
            "位置權限被拒絕。請在瀏覽器設定中允許存取位置。"
        );
    }
}
