//! Quran / Hadith lookup and question analysis.

use serde::Serialize;

use ramadan_core::models::{Analysis, Ayah, Hadith, Language, PassageList};
use ramadan_core::operation::Operation;

use crate::client::GatewayClient;
use crate::error::GatewayResult;

#[derive(Debug, Serialize)]
struct AnalyzeBody<'a> {
    email: &'a str,
    question: &'a str,
}

#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    query: &'a str,
    language: Language,
}

impl GatewayClient {
    /// Match a free-form question to a verse and a saying.
    ///
    /// `POST /analyzer/analyze`.
    pub async fn analyze_question(&self, email: &str, question: &str) -> GatewayResult<Analysis> {
        self.post(
            Operation::AnalyzeQuestion,
            "/analyzer/analyze",
            &AnalyzeBody { email, question },
        )
        .await
    }

    /// `GET /analyzer/ayahs`.
    pub async fn list_ayahs(&self) -> GatewayResult<Vec<Ayah>> {
        let list: PassageList = self.get(Operation::ListAyahs, "/analyzer/ayahs").await?;
        Ok(list.into_inner())
    }

    /// `GET /analyzer/hadiths`.
    pub async fn list_hadiths(&self) -> GatewayResult<Vec<Hadith>> {
        let list: PassageList = self
            .get(Operation::ListHadiths, "/analyzer/hadiths")
            .await?;
        Ok(list.into_inner())
    }

    /// `GET /search/quran?query=..&language=..`.
    pub async fn search_quran(&self, query: &str, language: Language) -> GatewayResult<Vec<Ayah>> {
        let list: PassageList = self
            .get_with_query(
                Operation::SearchQuran,
                "/search/quran",
                &SearchQuery { query, language },
            )
            .await?;
        Ok(list.into_inner())
    }

    /// `GET /search/hadith?query=..&language=..`.
    pub async fn search_hadith(
        &self,
        query: &str,
        language: Language,
    ) -> GatewayResult<Vec<Hadith>> {
        let list: PassageList = self
            .get_with_query(
                Operation::SearchHadith,
                "/search/hadith",
                &SearchQuery { query, language },
            )
            .await?;
        Ok(list.into_inner())
    }
}
