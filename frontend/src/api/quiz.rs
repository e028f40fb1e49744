use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{ApiError, QuizQuestion},
};

impl ApiClient {
    /// One random question; the server picks the trick and shuffles the
    /// answer options.
    pub async fn random_quiz_question(
        &self,
        category: Option<&str>,
    ) -> Result<QuizQuestion, ApiError> {
        let mut path = String::from("/api/quiz/random");
        if let Some(category) = category {
            path.push_str("?category=");
            path.push_str(&utf8_percent_encode(category, NON_ALPHANUMERIC).to_string());
        }
        let builder = self.get(&path).await;
        self.execute_json(builder).await
    }
}
