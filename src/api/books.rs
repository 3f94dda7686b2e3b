//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookResponse, CreateBook, ListBooksQuery, PageResponse, UpdateBook},
        link,
    },
};

use super::RequestContext;

fn to_dto(ctx: &RequestContext, book: &Book) -> BookResponse {
    BookResponse::from_entity(book, link::book_links(&ctx.scheme, &ctx.host, book.id))
}

/// List books with pagination
///
/// Paging inputs are normalized rather than rejected, so this endpoint has
/// no error responses.
pub async fn list_books(
    State(state): State<crate::AppState>,
    ctx: RequestContext,
    Query(query): Query<ListBooksQuery>,
) -> Json<PageResponse> {
    let page = state.services.books.list(&query).await;

    let items = page.items.iter().map(|b| to_dto(&ctx, b)).collect();
    Json(PageResponse {
        items,
        page: page.page,
        page_size: page.page_size,
        total_count: page.total_count,
        total_pages: page.total_pages,
        links: link::collection_links(
            &ctx.scheme,
            &ctx.host,
            page.page,
            page.page_size,
            page.total_pages,
        ),
    })
}

/// Get a book by ID
pub async fn get_book(
    State(state): State<crate::AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(to_dto(&ctx, &book)))
}

/// Create a new book
pub async fn create_book(
    State(state): State<crate::AppState>,
    ctx: RequestContext,
    Json(data): Json<CreateBook>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<BookResponse>)> {
    let book = state.services.books.create(&data).await?;

    let location = format!("/api/books/{}", book.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(to_dto(&ctx, &book)),
    ))
}

/// Replace an existing book
pub async fn update_book(
    State(state): State<crate::AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateBook>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.update(id, &data).await?;
    Ok(Json(to_dto(&ctx, &book)))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
