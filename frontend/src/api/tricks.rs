use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{ApiError, Trick},
};

fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

impl ApiClient {
    pub async fn tricks(&self, category: Option<&str>) -> Result<Vec<Trick>, ApiError> {
        let mut path = String::from("/api/tricks");
        if let Some(category) = category {
            path.push_str("?category=");
            path.push_str(&encode_query_value(category));
        }
        let builder = self.get(&path).await;
        self.execute_json(builder).await
    }

    pub async fn trick(&self, trick_id: i64) -> Result<Trick, ApiError> {
        let builder = self.get(&format!("/api/tricks/{}", trick_id)).await;
        self.execute_json(builder).await
    }

    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        let builder = self.get("/api/categories").await;
        self.execute_json(builder).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn query_values_are_percent_encoded() {
        assert_eq!(encode_query_value("Big Air"), "Big%20Air");
        assert_eq!(encode_query_value("grabs"), "grabs");
    }
}
