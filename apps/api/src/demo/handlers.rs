use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::demo::market::{generate_quote, normalize_symbol, MarketQuote};
use crate::demo::responses::Assistant;
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct QuestionQuery {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct DemoAnswer {
    pub question: String,
    pub answer: String,
    pub suggested_questions: Vec<&'static str>,
}

fn answer(assistant: Assistant, query: QuestionQuery) -> Result<Json<DemoAnswer>, AppError> {
    let question = query.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("Please enter a question first.".to_string()));
    }
    Ok(Json(DemoAnswer {
        question: question.to_string(),
        answer: assistant.answer(question),
        suggested_questions: assistant.suggested_questions(),
    }))
}

/// GET /api/v1/demo/advisor
pub async fn handle_advisor(
    Query(query): Query<QuestionQuery>,
) -> Result<Json<DemoAnswer>, AppError> {
    answer(Assistant::Advisor, query)
}

/// GET /api/v1/demo/support
pub async fn handle_support(
    Query(query): Query<QuestionQuery>,
) -> Result<Json<DemoAnswer>, AppError> {
    answer(Assistant::Support, query)
}

/// GET /api/v1/demo/market/:symbol
pub async fn handle_market(Path(symbol): Path<String>) -> Result<Json<MarketQuote>, AppError> {
    let symbol = normalize_symbol(&symbol).ok_or_else(|| {
        AppError::Validation(format!("'{symbol}' is not a valid stock symbol"))
    })?;
    Ok(Json(generate_quote(&symbol, &mut rand::thread_rng())))
}
