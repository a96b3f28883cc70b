use crate::error::ApiResult;

/// Life of one async call owned by a page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<ApiResult<T>> for LoadState<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn results_map_to_terminal_states() {
        let ok: LoadState<u8> = Ok(3).into();
        assert_eq!(ok.loaded(), Some(&3));

        let failed: LoadState<u8> = Err(ApiError::Network {
            message: "offline".into(),
        })
        .into();
        assert_eq!(failed.error(), Some("offline"));
        assert!(failed.loaded().is_none());
        assert!(!failed.is_loading());
    }
}
