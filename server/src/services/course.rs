//! Course catalogue queries scoped to the signed-in student.

use reviews::{CourseSummary, PAGE_SIZE, Paged, Pagination};
use sqlx::PgPool;

use super::session::SessionStudent;

/// Page through the courses attached to the student's degree programme,
/// flagging the ones the student already reviewed.
///
/// # Errors
///
/// Returns a database error if either query fails.
pub async fn list_for_student(
    pool: &PgPool,
    student: &SessionStudent,
    raw_page: Option<&str>,
) -> Result<Paged<CourseSummary>, sqlx::Error> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM course_programmes WHERE degree_programme_id = $1")
        .bind(student.degree_programme_id)
        .fetch_one(pool)
        .await?;

    let pagination = Pagination::resolve(raw_page, u64::try_from(total).unwrap_or_default(), PAGE_SIZE);

    let rows = sqlx::query_as::<_, (i64, String, bool)>(
        r"SELECT c.id, c.name,
                 EXISTS (
                     SELECT 1 FROM course_reviews r
                     WHERE r.course_id = c.id AND r.student_id = $2
                 ) AS is_commented
          FROM courses c
          JOIN course_programmes cp ON cp.course_id = c.id
          WHERE cp.degree_programme_id = $1
          ORDER BY c.id
          LIMIT $3 OFFSET $4",
    )
    .bind(student.degree_programme_id)
    .bind(student.id)
    .bind(to_i64(pagination.limit()))
    .bind(to_i64(pagination.offset()))
    .fetch_all(pool)
    .await?;

    let items = rows
        .into_iter()
        .map(|(id, name, is_commented)| CourseSummary { id, name, is_commented })
        .collect();

    Ok(Paged { items, pagination })
}

/// Whether a course with this id exists.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn exists(pool: &PgPool, course_id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM courses WHERE id = $1)")
        .bind(course_id)
        .fetch_one(pool)
        .await
}

pub(crate) fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "course_test.rs"]
mod tests;
