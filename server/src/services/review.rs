//! Course review service: the add-comment flow and the student's own list.
//!
//! DESIGN
//! ======
//! The duplicate check runs before form validation, so a student who already
//! reviewed a course gets the "already commented" notice regardless of what
//! they typed. The `(student_id, course_id)` unique index backs the check:
//! an insert that loses a race is reported the same way.

use reviews::{CommentForm, FieldErrors, PAGE_SIZE, Paged, Pagination, ReviewSummary};
use sqlx::PgPool;
use tracing::info;

use super::course;

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("course not found: {0}")]
    CourseNotFound(i64),
    #[error("{}", reviews::response::ALREADY_COMMENTED)]
    AlreadyCommented,
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Whether the student already reviewed the course.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn has_reviewed(pool: &PgPool, student_id: i64, course_id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM course_reviews WHERE student_id = $1 AND course_id = $2)",
    )
    .bind(student_id)
    .bind(course_id)
    .fetch_one(pool)
    .await
}

/// Validate and store a review of `course_id` by `student_id`.
///
/// # Errors
///
/// - [`ReviewError::AlreadyCommented`] if a review already exists
/// - [`ReviewError::Invalid`] with per-field messages if the form is rejected
/// - [`ReviewError::CourseNotFound`] if the course does not exist
/// - [`ReviewError::Database`] on query failure
pub async fn add_review(pool: &PgPool, student_id: i64, course_id: i64, form: &CommentForm) -> Result<i64, ReviewError> {
    if has_reviewed(pool, student_id, course_id).await? {
        return Err(ReviewError::AlreadyCommented);
    }

    let review = form.validate().map_err(ReviewError::Invalid)?;

    if !course::exists(pool, course_id).await? {
        return Err(ReviewError::CourseNotFound(course_id));
    }

    let id: Option<i64> = sqlx::query_scalar(
        r"INSERT INTO course_reviews
              (student_id, course_id, overall_score, easiness_score, interest_score,
               usefulness_score, teaching_score, comment)
          VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
          ON CONFLICT (student_id, course_id) DO NOTHING
          RETURNING id",
    )
    .bind(student_id)
    .bind(course_id)
    .bind(review.overall_score)
    .bind(review.easiness_score)
    .bind(review.interest_score)
    .bind(review.usefulness_score)
    .bind(review.teaching_score)
    .bind(&review.comment)
    .fetch_optional(pool)
    .await?;

    let id = id.ok_or(ReviewError::AlreadyCommented)?;
    info!(review_id = id, student_id, course_id, "review stored");
    Ok(id)
}

/// Page through the reviews written by `student_id`, newest first.
///
/// # Errors
///
/// Returns a database error if either query fails.
pub async fn list_for_student(
    pool: &PgPool,
    student_id: i64,
    raw_page: Option<&str>,
) -> Result<Paged<ReviewSummary>, sqlx::Error> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM course_reviews WHERE student_id = $1")
        .bind(student_id)
        .fetch_one(pool)
        .await?;

    let pagination = Pagination::resolve(raw_page, u64::try_from(total).unwrap_or_default(), PAGE_SIZE);

    let rows = sqlx::query_as::<_, ReviewRow>(
        r"SELECT r.id, r.course_id, c.name AS course_name,
                 r.overall_score, r.easiness_score, r.interest_score,
                 r.usefulness_score, r.teaching_score, r.comment
          FROM course_reviews r
          JOIN courses c ON c.id = r.course_id
          WHERE r.student_id = $1
          ORDER BY r.created_at DESC, r.id DESC
          LIMIT $2 OFFSET $3",
    )
    .bind(student_id)
    .bind(course::to_i64(pagination.limit()))
    .bind(course::to_i64(pagination.offset()))
    .fetch_all(pool)
    .await?;

    Ok(Paged { items: rows.into_iter().map(ReviewSummary::from).collect(), pagination })
}

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    course_id: i64,
    course_name: String,
    overall_score: i32,
    easiness_score: i32,
    interest_score: i32,
    usefulness_score: i32,
    teaching_score: i32,
    comment: String,
}

impl From<ReviewRow> for ReviewSummary {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            course_id: row.course_id,
            course_name: row.course_name,
            overall_score: row.overall_score,
            easiness_score: row.easiness_score,
            interest_score: row.interest_score,
            usefulness_score: row.usefulness_score,
            teaching_score: row.teaching_score,
            comment: row.comment,
        }
    }
}

#[cfg(test)]
#[path = "review_test.rs"]
mod tests;
