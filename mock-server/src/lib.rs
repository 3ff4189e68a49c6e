use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub image: String,
    pub description: String,
    pub content: Content,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Content {
    pub introduction: String,
    pub sections: Vec<Section>,
    pub conclusion: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

/// List envelope matching the production backend's `GET /blogs` shape.
#[derive(Serialize, Deserialize)]
pub struct BlogListResponse {
    pub blogs: Vec<Blog>,
}

pub type Db = Arc<RwLock<HashMap<String, Blog>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/blogs", get(list_blogs).post(create_blog))
        .route("/blogs/{id}", get(get_blog).put(update_blog).delete(delete_blog))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_blogs(State(db): State<Db>) -> Json<BlogListResponse> {
    let blogs = db.read().await;
    let mut blogs: Vec<Blog> = blogs.values().cloned().collect();
    // Deterministic order for clients that display the list.
    blogs.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
    Json(BlogListResponse { blogs })
}

// Ids are assigned by the client, so create stores the record as-is.
async fn create_blog(
    State(db): State<Db>,
    Json(blog): Json<Blog>,
) -> (StatusCode, Json<Blog>) {
    db.write().await.insert(blog.id.clone(), blog.clone());
    (StatusCode::CREATED, Json(blog))
}

async fn get_blog(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Blog>, StatusCode> {
    let blogs = db.read().await;
    blogs.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_blog(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(blog): Json<Blog>,
) -> Result<Json<Blog>, StatusCode> {
    let mut blogs = db.write().await;
    if !blogs.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    blogs.insert(id, blog.clone());
    Ok(Json(blog))
}

async fn delete_blog(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut blogs = db.write().await;
    blogs
        .remove(&id)
        .map(|_| Json(json!({ "message": "Blog deleted" })))
        .ok_or(StatusCode::NOT_FOUND)
}
