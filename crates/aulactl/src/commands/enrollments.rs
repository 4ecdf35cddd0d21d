//! Enrollment commands.

use anyhow::{bail, Result};
use clap::Subcommand;

use aula_client::api::AulaClient;
use aula_client::models::{
    Enrollment, EnrollmentFilters, EnrollmentStatus, NewEnrollment, Page, ProgressUpdate,
};

use super::format_date;

#[derive(Subcommand)]
pub enum EnrollmentsCommand {
    /// List your own enrollments
    Mine {
        /// active, expired, or cancelled
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        size: Option<u32>,
    },
    /// List all enrollments (admin)
    List {
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        size: Option<u32>,

        #[arg(long)]
        user_id: Option<String>,

        #[arg(long)]
        course_id: Option<String>,
    },
    /// Show one enrollment
    Show { enrollment_id: String },
    /// Enroll a user in a course (admin)
    Create {
        #[arg(long)]
        user_id: String,

        #[arg(long)]
        course_id: String,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Extend an enrollment's expiration (admin)
    Extend {
        enrollment_id: String,

        /// Days to add to the expiration date
        #[arg(long)]
        days: u32,
    },
    /// Cancel an enrollment (admin)
    Cancel { enrollment_id: String },
    /// Report video progress
    Progress {
        enrollment_id: String,

        #[arg(long)]
        lesson_id: String,

        /// Playback position in seconds
        #[arg(long)]
        position: u64,
    },
}

pub async fn run(client: &AulaClient, command: EnrollmentsCommand) -> Result<()> {
    match command {
        EnrollmentsCommand::Mine { status, page, size } => {
            let filters = EnrollmentFilters {
                status: status.as_deref().map(parse_status).transpose()?,
                page,
                size,
                ..Default::default()
            };
            let result = client.enrollments().mine(&filters).await?;
            print_page(&result);
            Ok(())
        }
        EnrollmentsCommand::List {
            status,
            page,
            size,
            user_id,
            course_id,
        } => {
            let filters = EnrollmentFilters {
                status: status.as_deref().map(parse_status).transpose()?,
                page,
                size,
                user_id,
                course_id,
            };
            let result = client.enrollments().list(&filters).await?;
            print_page(&result);
            Ok(())
        }
        EnrollmentsCommand::Show { enrollment_id } => {
            let enrollment = client.enrollments().get_by_id(&enrollment_id).await?;
            print_enrollment(&enrollment);
            Ok(())
        }
        EnrollmentsCommand::Create {
            user_id,
            course_id,
            notes,
        } => {
            let enrollment = client
                .enrollments()
                .create(&NewEnrollment {
                    user_id,
                    course_id,
                    notes,
                })
                .await?;
            println!("Enrollment created: {}", enrollment.id);
            Ok(())
        }
        EnrollmentsCommand::Extend {
            enrollment_id,
            days,
        } => {
            let enrollment = client.enrollments().extend(&enrollment_id, days).await?;
            println!(
                "Enrollment {} now expires {}",
                enrollment.id,
                format_date(&enrollment.expires_at)
            );
            Ok(())
        }
        EnrollmentsCommand::Cancel { enrollment_id } => {
            let response = client.enrollments().cancel(&enrollment_id).await?;
            println!("{}", response.message);
            Ok(())
        }
        EnrollmentsCommand::Progress {
            enrollment_id,
            lesson_id,
            position,
        } => {
            let response = client
                .enrollments()
                .update_progress(
                    &enrollment_id,
                    &ProgressUpdate {
                        lesson_id,
                        video_position_seconds: position,
                    },
                )
                .await?;
            println!("{}", response.message);
            Ok(())
        }
    }
}

fn print_page(page: &Page<Enrollment>) {
    if page.data.is_empty() {
        println!("No enrollments found.");
        return;
    }

    println!("{:26} {:26} {:10} {:12} EXPIRES", "ID", "COURSE", "STATUS", "ENROLLED");
    println!("{}", "-".repeat(90));
    for enrollment in &page.data {
        println!(
            "{:26} {:26} {:10} {:12} {}",
            enrollment.id,
            enrollment.course_id,
            enrollment.status,
            format_date(&enrollment.enrolled_at),
            format_date(&enrollment.expires_at)
        );
    }
    println!(
        "\nPage {} of {} ({} enrollments total)",
        page.page, page.total_pages, page.total
    );
}

fn print_enrollment(enrollment: &Enrollment) {
    println!("ID:       {}", enrollment.id);
    println!("User:     {}", enrollment.user_id);
    println!("Course:   {}", enrollment.course_id);
    println!("Status:   {}", enrollment.status);
    println!("Enrolled: {}", format_date(&enrollment.enrolled_at));
    println!("Expires:  {}", format_date(&enrollment.expires_at));
    if let Some(ref lesson_id) = enrollment.last_accessed_lesson_id {
        println!("Resume:   {}", lesson_id);
        if let Some(position) = enrollment.last_video_position_seconds {
            println!("Position: {}m{}s", position / 60, position % 60);
        }
    }
    if let Some(completed) = enrollment.completed_at {
        println!("Done:     {}", format_date(&completed));
    }
    if let Some(ref url) = enrollment.certificate_url {
        println!("Cert:     {}", url);
    }
    if let Some(ref notes) = enrollment.notes {
        println!("Notes:    {}", notes);
    }
}

fn parse_status(value: &str) -> Result<EnrollmentStatus> {
    match value.to_uppercase().as_str() {
        "ACTIVE" => Ok(EnrollmentStatus::Active),
        "EXPIRED" => Ok(EnrollmentStatus::Expired),
        "CANCELLED" => Ok(EnrollmentStatus::Cancelled),
        other => bail!(
            "Invalid status '{}' (expected: active, expired, cancelled)",
            other
        ),
    }
}
