use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::resource::{
        AddTagRequest, CreateResourceRequest, RateResourceRequest, ResourceResponse,
        ResourceService, UpdateResourceRequest,
    },
    error::AppResult,
};

pub struct ResourceController {
    resource_service: Arc<ResourceService>,
}

impl ResourceController {
    pub fn new(resource_service: Arc<ResourceService>) -> Self {
        Self { resource_service }
    }

    /// POST /api/resources - Create new resource
    pub async fn create_resource(
        State(controller): State<Arc<ResourceController>>,
        Json(request): Json<CreateResourceRequest>,
    ) -> AppResult<(StatusCode, Json<ResourceResponse>)> {
        let resource = controller.resource_service.create_resource(request).await?;
        Ok((StatusCode::CREATED, Json(resource)))
    }

    /// GET /api/resources/{resourceId} - Get one resource
    pub async fn get_resource(
        State(controller): State<Arc<ResourceController>>,
        Path(resource_id): Path<i64>,
    ) -> AppResult<Json<ResourceResponse>> {
        let resource = controller.resource_service.get_resource(resource_id).await?;
        Ok(Json(resource))
    }

    /// GET /api/categories/{categoryId}/resources - List resources in a category
    pub async fn list_by_category(
        State(controller): State<Arc<ResourceController>>,
        Path(category_id): Path<i64>,
    ) -> AppResult<Json<Vec<ResourceResponse>>> {
        let resources = controller
            .resource_service
            .list_by_category(category_id)
            .await?;
        Ok(Json(resources))
    }

    /// PUT /api/resources/{resourceId} - Update resource
    pub async fn update_resource(
        State(controller): State<Arc<ResourceController>>,
        Path(resource_id): Path<i64>,
        Json(request): Json<UpdateResourceRequest>,
    ) -> AppResult<Json<ResourceResponse>> {
        let resource = controller
            .resource_service
            .update_resource(resource_id, request)
            .await?;
        Ok(Json(resource))
    }

    /// DELETE /api/resources/{resourceId} - Delete resource
    pub async fn delete_resource(
        State(controller): State<Arc<ResourceController>>,
        Path(resource_id): Path<i64>,
    ) -> AppResult<StatusCode> {
        controller
            .resource_service
            .delete_resource(resource_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// POST /api/resources/{resourceId}/ratings - Rate a resource
    pub async fn rate_resource(
        State(controller): State<Arc<ResourceController>>,
        Path(resource_id): Path<i64>,
        Json(request): Json<RateResourceRequest>,
    ) -> AppResult<StatusCode> {
        controller
            .resource_service
            .rate_resource(resource_id, request)
            .await?;
        Ok(StatusCode::CREATED)
    }

    /// GET /api/resources/{resourceId}/tags - List tags of a resource
    pub async fn get_tags(
        State(controller): State<Arc<ResourceController>>,
        Path(resource_id): Path<i64>,
    ) -> AppResult<Json<Vec<String>>> {
        let tags = controller
            .resource_service
            .tags_for_resource(resource_id)
            .await?;
        Ok(Json(tags))
    }

    /// POST /api/resources/{resourceId}/tags - Attach a tag
    pub async fn add_tag(
        State(controller): State<Arc<ResourceController>>,
        Path(resource_id): Path<i64>,
        Json(request): Json<AddTagRequest>,
    ) -> AppResult<StatusCode> {
        controller.resource_service.add_tag(resource_id, request).await?;
        Ok(StatusCode::CREATED)
    }

    /// DELETE /api/resources/{resourceId}/tags/{tag} - Detach a tag
    pub async fn remove_tag(
        State(controller): State<Arc<ResourceController>>,
        Path((resource_id, tag)): Path<(i64, String)>,
    ) -> AppResult<StatusCode> {
        controller
            .resource_service
            .remove_tag(resource_id, &tag)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
