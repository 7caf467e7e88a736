//! MongoDB implementation of the book repository.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::{Collection, Database};

use crate::domain::entities::{Author, AuthorBooks, Book};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

const BOOKS_COLLECTION: &str = "books";
const AUTHORS_COLLECTION: &str = "authors";

/// MongoDB repository for book storage and retrieval.
///
/// Holds typed handles to the `books` and `authors` collections plus the
/// database handle for liveness checks. The underlying client is safe for
/// concurrent use; this type adds no synchronization of its own.
pub struct MongoBookRepository {
    database: Database,
    books: Collection<Book>,
    authors: Collection<Author>,
}

impl MongoBookRepository {
    /// Creates a new repository over the given database handle.
    pub fn new(database: &Database) -> Self {
        Self {
            database: database.clone(),
            books: database.collection(BOOKS_COLLECTION),
            authors: database.collection(AUTHORS_COLLECTION),
        }
    }
}

/// Parses a client-supplied identifier into an [`ObjectId`].
fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|e| AppError::bad_request(format!("malformed book id '{id}': {e}")))
}

/// Two-stage pipeline joining author documents to their books.
///
/// Stage 1 matches `full_name` exactly (case-sensitive, whole string);
/// stage 2 left-outer-joins the books collection on `full_name` = `author`,
/// embedding the matches under `books`.
fn author_books_pipeline(full_name: &str) -> Vec<Document> {
    vec![
        doc! { "$match": { "full_name": full_name } },
        doc! { "$lookup": {
            "from": BOOKS_COLLECTION,
            "localField": "full_name",
            "foreignField": "author",
            "as": "books",
        } },
    ]
}

#[async_trait]
impl BookRepository for MongoBookRepository {
    async fn create(&self, book: Book) -> Result<String, AppError> {
        let result = self.books.insert_one(&book).await?;

        Ok(result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string()))
    }

    async fn get_by_id(&self, id: &str) -> Result<Book, AppError> {
        let object_id = parse_object_id(id)?;

        self.books
            .find_one(doc! { "_id": object_id })
            .await?
            .ok_or_else(|| AppError::not_found(format!("no book with id '{id}'")))
    }

    async fn list_all(&self) -> (Vec<Book>, Option<AppError>) {
        let mut books = Vec::new();

        // The cursor is dropped, and thereby released, on every exit path.
        let mut cursor = match self.books.find(doc! {}).await {
            Ok(cursor) => cursor,
            Err(e) => return (books, Some(e.into())),
        };

        loop {
            match cursor.advance().await {
                Ok(true) => match cursor.deserialize_current() {
                    Ok(book) => books.push(book),
                    Err(e) => return (books, Some(e.into())),
                },
                Ok(false) => break,
                Err(e) => return (books, Some(e.into())),
            }
        }

        (books, None)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;

        // Zero matched documents is fine: the delete is idempotent.
        self.books.delete_one(doc! { "_id": object_id }).await?;
        Ok(())
    }

    async fn update_page_count(&self, id: &str, page_count: i64) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;

        self.books
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "page_count": page_count } },
            )
            .await?;
        Ok(())
    }

    async fn find_author_books(&self, full_name: &str) -> Result<Vec<Book>, AppError> {
        let mut cursor = self
            .authors
            .aggregate(author_books_pipeline(full_name))
            .with_type::<AuthorBooks>()
            .await?;

        if cursor.advance().await? {
            Ok(cursor.deserialize_current()?.books)
        } else {
            Err(AppError::not_found(format!("no author named '{full_name}'")))
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
