use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::grouping::group_model::GroupedElement;
use crate::similarity::similarity_model::SimilarityResult;

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    /// Pipeline stage: "compare", "group", "fallback"
    pub stage: String,

    pub detail: String,

    pub score: Option<f64>,
    pub pages: Vec<String>,
}

impl TraceEvent {
    pub fn now(stage: impl ToString) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            stage: stage.to_string(),
            detail: String::new(),
            score: None,
            pages: vec![],
        }
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = detail.to_string();
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_pages(mut self, pages: &[String]) -> Self {
        self.pages = pages.to_vec();
        self
    }

    pub fn pair_scored(result: &SimilarityResult) -> Self {
        Self::now("compare")
            .with_detail(format!(
                "{} ~ {} [{}]",
                result.left.selector,
                result.right.selector,
                result.matching_attributes.join(",")
            ))
            .with_score(result.score)
            .with_pages(&[
                result.left.source_page.clone(),
                result.right.source_page.clone(),
            ])
    }

    pub fn group_emitted(group: &GroupedElement) -> Self {
        Self::now("group")
            .with_detail(format!("{} -> {}", group.name, group.locator))
            .with_score(group.confidence)
            .with_pages(&group.pages)
    }
}
