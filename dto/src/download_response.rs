use derive_getters::Getters;
use serde::Deserialize;

/// Reply of the `downloadFiles` route: the rsync command to display.
#[derive(Debug, Getters, Deserialize, PartialEq, Clone)]
pub struct DownloadResponse {
    result: String,
}

#[cfg(test)]
mod tests {
    use crate::download_response::DownloadResponse;

    #[test]
    fn should_deserialize_response() {
        let response: DownloadResponse =
            serde_json_wasm::from_str(r#"{"result": "rsync -avz sas@dtn01:/8485/ ."}"#).unwrap();
        assert_eq!("rsync -avz sas@dtn01:/8485/ .", response.result());
    }

    #[test]
    fn should_fail_without_result() {
        let response = serde_json_wasm::from_str::<DownloadResponse>(r#"{"status": 1}"#);
        assert!(response.is_err());
    }
}
