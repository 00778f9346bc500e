use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::category::{
        CategoryResponse, CategoryService, CreateCategoryRequest, UpdateCategoryRequest,
    },
    error::AppResult,
};

pub struct CategoryController {
    category_service: Arc<CategoryService>,
}

impl CategoryController {
    pub fn new(category_service: Arc<CategoryService>) -> Self {
        Self { category_service }
    }

    /// GET /api/categories - List all categories
    pub async fn list_categories(
        State(controller): State<Arc<CategoryController>>,
    ) -> AppResult<Json<Vec<CategoryResponse>>> {
        let categories = controller.category_service.list_categories().await?;
        Ok(Json(categories))
    }

    /// POST /api/categories - Create new category
    pub async fn create_category(
        State(controller): State<Arc<CategoryController>>,
        Json(request): Json<CreateCategoryRequest>,
    ) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
        let category = controller.category_service.create_category(request).await?;
        Ok((StatusCode::CREATED, Json(category)))
    }

    /// GET /api/categories/{categoryId} - Get one category
    pub async fn get_category(
        State(controller): State<Arc<CategoryController>>,
        Path(category_id): Path<i64>,
    ) -> AppResult<Json<CategoryResponse>> {
        let category = controller.category_service.get_category(category_id).await?;
        Ok(Json(category))
    }

    /// PUT /api/categories/{categoryId} - Update category
    pub async fn update_category(
        State(controller): State<Arc<CategoryController>>,
        Path(category_id): Path<i64>,
        Json(request): Json<UpdateCategoryRequest>,
    ) -> AppResult<Json<CategoryResponse>> {
        let category = controller
            .category_service
            .update_category(category_id, request)
            .await?;
        Ok(Json(category))
    }

    /// DELETE /api/categories/{categoryId} - Delete category
    pub async fn delete_category(
        State(controller): State<Arc<CategoryController>>,
        Path(category_id): Path<i64>,
    ) -> AppResult<StatusCode> {
        controller
            .category_service
            .delete_category(category_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
