//! Catalog command handler

use gradepoint::core::catalog::Catalog;
use gradepoint::core::models::Semester;
use gradepoint::core::report::format_credits;

/// Print the schedule overview, or the courses of one semester
pub fn run(catalog: &Catalog, semester: Option<&str>) -> Result<(), String> {
    match semester {
        None => print_schedule(catalog),
        Some(key) => {
            let semester = catalog.schedule.get_semester(key).ok_or_else(|| {
                let keys: Vec<&str> = catalog.schedule.keys().collect();
                format!("✗ Unknown semester '{key}'. Available: {}", keys.join(", "))
            })?;
            print_semester(semester);
        }
    }
    print_scale(catalog);
    Ok(())
}

fn print_schedule(catalog: &Catalog) {
    println!("\n=== Credit Schedule ===\n");
    for semester in catalog.schedule.semesters() {
        println!(
            "{:<14} {:>2} courses  {:>6} credits",
            semester.label(),
            semester.course_count(),
            format_credits(semester.total_credit_hours())
        );
    }
    println!(
        "\nTotal: {} credits in {} semesters",
        format_credits(catalog.schedule.offered_credit_total()),
        catalog.schedule.len()
    );
}

fn print_semester(semester: &Semester) {
    println!("\n=== {} ===\n", semester.label());
    let width = semester
        .courses()
        .iter()
        .map(|c| c.code.len())
        .max()
        .unwrap_or(0);
    for course in semester.courses() {
        println!(
            "{:<width$}  {:>5}  {}",
            course.code,
            format_credits(course.credit_hours),
            course.name
        );
    }
    println!(
        "\nTotal: {} credits",
        format_credits(semester.total_credit_hours())
    );
}

fn print_scale(catalog: &Catalog) {
    let scale = &catalog.scale;
    println!("\n=== Grade Scale ===\n");
    for grade in scale.grades() {
        println!("{:<4} {:.2}", grade.label, grade.points);
    }
    println!(
        "\n'{}' marks a course as not attempted; '{}' is attempted but not secured.",
        scale.not_attempted(),
        scale.failing()
    );
}
