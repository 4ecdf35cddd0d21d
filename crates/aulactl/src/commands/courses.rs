//! Course and lesson commands.

use anyhow::{bail, Result};
use clap::Subcommand;

use aula_client::api::AulaClient;
use aula_client::models::{CourseDifficulty, CourseFilters, CourseStatus, Lesson};

use super::format_date;

#[derive(Subcommand)]
pub enum CoursesCommand {
    /// List courses
    List {
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        category: Option<String>,

        /// beginner, intermediate, advanced, or expert
        #[arg(long)]
        difficulty: Option<String>,

        /// draft, review, published, archived, or retired
        #[arg(long)]
        status: Option<String>,

        /// Free-text search
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one course with its lessons
    Show {
        /// Course slug
        slug: String,
    },
    /// List the lessons of a course
    Lessons {
        /// Course ID
        course_id: String,
    },
}

#[derive(Subcommand)]
pub enum LessonsCommand {
    /// Show one lesson
    Show {
        /// Lesson ID
        lesson_id: String,
    },
}

pub async fn run(client: &AulaClient, command: CoursesCommand) -> Result<()> {
    match command {
        CoursesCommand::List {
            page,
            limit,
            category,
            difficulty,
            status,
            search,
        } => {
            let filters = CourseFilters {
                page,
                limit,
                category,
                difficulty: difficulty.as_deref().map(parse_difficulty).transpose()?,
                status: status.as_deref().map(parse_status).transpose()?,
                search,
            };
            cmd_list(client, &filters).await
        }
        CoursesCommand::Show { slug } => cmd_show(client, &slug).await,
        CoursesCommand::Lessons { course_id } => cmd_lessons(client, &course_id).await,
    }
}

pub async fn run_lessons(client: &AulaClient, command: LessonsCommand) -> Result<()> {
    match command {
        LessonsCommand::Show { lesson_id } => {
            let lesson = client.lessons().get_by_id(&lesson_id).await?;
            print_lesson(&lesson);
            Ok(())
        }
    }
}

async fn cmd_list(client: &AulaClient, filters: &CourseFilters) -> Result<()> {
    let page = client.courses().list(filters).await?;

    if page.data.is_empty() {
        println!("No courses found.");
        return Ok(());
    }

    println!("{:30} {:30} {:12} {:10} PUBLISHED", "SLUG", "TITLE", "DIFFICULTY", "STATUS");
    println!("{}", "-".repeat(95));
    for course in &page.data {
        let published = course
            .published_at
            .as_ref()
            .map(format_date)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:30} {:30} {:12} {:10} {}",
            course.slug, course.title, course.difficulty, course.status, published
        );
    }
    println!(
        "\nPage {} of {} ({} courses total)",
        page.page, page.total_pages, page.total
    );
    Ok(())
}

async fn cmd_show(client: &AulaClient, slug: &str) -> Result<()> {
    let course = client.courses().get_by_slug(slug).await?;

    println!("Title:       {}", course.title);
    println!("Category:    {}", course.category);
    println!("Difficulty:  {}", course.difficulty);
    println!("Status:      {}", course.status);
    println!("Price:       {} {}", course.price, course.currency);
    println!("Enrolled:    {}", course.is_enrolled);
    println!("Lessons:     {}", course.lessons_count);
    println!("Duration:    {} h", course.total_duration_hours);
    if let Some(rating) = course.rating_average {
        println!("Rating:      {:.1}", rating);
    }
    println!("\n{}", course.description);

    if !course.lessons.is_empty() {
        println!("\nLessons:");
        for lesson in &course.lessons {
            let duration = lesson
                .duration_seconds
                .map(|s| format!("{}m", s / 60))
                .unwrap_or_else(|| "-".to_string());
            let preview = if lesson.is_preview { " (preview)" } else { "" };
            println!("  {:3} {:40} {}{}", lesson.order, lesson.title, duration, preview);
        }
    }
    Ok(())
}

async fn cmd_lessons(client: &AulaClient, course_id: &str) -> Result<()> {
    let lessons = client.courses().lessons(course_id).await?;

    if lessons.is_empty() {
        println!("No lessons found.");
        return Ok(());
    }

    println!("{:26} {:5} {:40} PREVIEW", "ID", "ORDER", "TITLE");
    println!("{}", "-".repeat(80));
    for lesson in &lessons {
        println!(
            "{:26} {:5} {:40} {}",
            lesson.id, lesson.order, lesson.title, lesson.is_preview
        );
    }
    Ok(())
}

fn print_lesson(lesson: &Lesson) {
    println!("Title:    {}", lesson.title);
    println!("Course:   {}", lesson.course_id);
    println!("Order:    {}", lesson.order);
    println!("Preview:  {}", lesson.is_preview);
    if let Some(ref summary) = lesson.summary {
        println!("Summary:  {}", summary);
    }
    if let Some(seconds) = lesson.duration_seconds {
        println!("Duration: {}m{}s", seconds / 60, seconds % 60);
    }
    if let Some(ref url) = lesson.video_url {
        println!("Video:    {}", url);
    }
    if !lesson.materials.is_empty() {
        println!("Materials:");
        for material in &lesson.materials {
            println!("  - {} ({})", material.title, material.resource_url);
        }
    }
}

fn parse_difficulty(value: &str) -> Result<CourseDifficulty> {
    match value.to_uppercase().as_str() {
        "BEGINNER" => Ok(CourseDifficulty::Beginner),
        "INTERMEDIATE" => Ok(CourseDifficulty::Intermediate),
        "ADVANCED" => Ok(CourseDifficulty::Advanced),
        "EXPERT" => Ok(CourseDifficulty::Expert),
        other => bail!(
            "Invalid difficulty '{}' (expected: beginner, intermediate, advanced, expert)",
            other
        ),
    }
}

fn parse_status(value: &str) -> Result<CourseStatus> {
    match value.to_uppercase().as_str() {
        "DRAFT" => Ok(CourseStatus::Draft),
        "REVIEW" => Ok(CourseStatus::Review),
        "PUBLISHED" => Ok(CourseStatus::Published),
        "ARCHIVED" => Ok(CourseStatus::Archived),
        "RETIRED" => Ok(CourseStatus::Retired),
        other => bail!(
            "Invalid status '{}' (expected: draft, review, published, archived, retired)",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty_case_insensitive() {
        assert_eq!(
            parse_difficulty("beginner").unwrap(),
            CourseDifficulty::Beginner
        );
        assert_eq!(
            parse_difficulty("EXPERT").unwrap(),
            CourseDifficulty::Expert
        );
        assert!(parse_difficulty("impossible").is_err());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("published").unwrap(), CourseStatus::Published);
        assert!(parse_status("deleted").is_err());
    }
}
